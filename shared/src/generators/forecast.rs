//! Forward price projection

use chrono::{Days, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::ModelError;
use crate::models::PricePrediction;
use crate::types::{round_dp, to_f64};

/// Number of daily steps in a forecast
pub const FORECAST_HORIZON: u32 = 7;
/// Constant upward drift applied at every step
pub const FORECAST_DRIFT: f64 = 0.02;
/// Random spread applied at every step (±5%)
pub const FORECAST_VARIANCE: f64 = 0.05;

const CONFIDENCE_START: u32 = 95;
const CONFIDENCE_DECAY: u32 = 5;
pub const CONFIDENCE_FLOOR: u8 = 50;

/// Confidence attached to the forecast `step` days ahead (1-based)
pub fn confidence_at(step: u32) -> u8 {
    let confidence = CONFIDENCE_START.saturating_sub(step.saturating_mul(CONFIDENCE_DECAY));
    // Never exceeds 95, so the narrowing is lossless
    confidence.max(u32::from(CONFIDENCE_FLOOR)) as u8
}

/// Project `current_price` seven days forward
///
/// Each step compounds a +2% drift with a uniform ±5% shock. Confidence
/// starts at 90 and decays by five per day, floored at 50.
pub fn generate_price_predictions<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    current_price: Decimal,
) -> Result<Vec<PricePrediction>, ModelError> {
    if current_price <= Decimal::ZERO {
        return Err(ModelError::NonPositivePrice(current_price));
    }

    let mut price = to_f64(current_price);
    let mut predictions = Vec::with_capacity(FORECAST_HORIZON as usize);

    for step in 1..=FORECAST_HORIZON {
        let date = today
            .checked_add_days(Days::new(u64::from(step)))
            .ok_or(ModelError::DateOutOfRange {
                days: u64::from(step),
            })?;

        let shock = rng.gen_range(-FORECAST_VARIANCE..FORECAST_VARIANCE);
        price *= 1.0 + FORECAST_DRIFT + shock;

        predictions.push(PricePrediction {
            date,
            predicted: round_dp(price, 1),
            confidence: confidence_at(step),
        });
    }

    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_confidence_schedule() {
        let schedule: Vec<u8> = (1..=7).map(confidence_at).collect();
        assert_eq!(schedule, vec![90, 85, 80, 75, 70, 65, 60]);
        assert_eq!(confidence_at(20), CONFIDENCE_FLOOR);
        assert_eq!(confidence_at(u32::MAX), CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_predictions_are_dated_from_tomorrow() {
        let mut rng = StdRng::seed_from_u64(9);
        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let predictions = generate_price_predictions(&mut rng, today, Decimal::from(100)).unwrap();

        assert_eq!(predictions.len(), 7);
        assert_eq!(predictions[0].date, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
        assert_eq!(predictions[6].date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let mut rng = StdRng::seed_from_u64(9);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        assert_eq!(
            generate_price_predictions(&mut rng, today, Decimal::ZERO),
            Err(ModelError::NonPositivePrice(Decimal::ZERO))
        );
        assert!(generate_price_predictions(&mut rng, today, Decimal::from(-5)).is_err());
    }
}
