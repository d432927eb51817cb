//! Historical price series generator

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::catalog::{history_base_price, market_multiplier};
use crate::error::ModelError;
use crate::models::PriceHistoryPoint;
use crate::types::round_dp;

/// Number of days shown on the price trend chart
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Longest history window the dashboards offer
pub const MAX_HISTORY_DAYS: u32 = 365;

/// Daily multiplicative step of the random walk (±7.5%)
const DAILY_VARIANCE: f64 = 0.075;

/// Generate `days + 1` daily prices ending on `today`
///
/// The series is a multiplicative random walk seeded from the crop's history
/// base price adjusted for the market. There is no mean reversion, so long windows
/// can wander far from the base price.
pub fn generate_price_history<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    crop: &str,
    market: &str,
    days: u32,
) -> Result<Vec<PriceHistoryPoint>, ModelError> {
    let start = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or(ModelError::DateOutOfRange {
            days: u64::from(days),
        })?;

    let mut current_price = history_base_price(crop) * market_multiplier(market);

    let history: Vec<PriceHistoryPoint> = start
        .iter_days()
        .take(days as usize + 1)
        .map(|date| {
            current_price *= 1.0 + rng.gen_range(-DAILY_VARIANCE..DAILY_VARIANCE);
            PriceHistoryPoint {
                date,
                price: round_dp(current_price, 1),
            }
        })
        .collect();

    tracing::debug!(crop, market, points = history.len(), "generated price history");
    Ok(history)
}
