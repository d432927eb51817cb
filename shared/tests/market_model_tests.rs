//! Market model integration tests
//!
//! Properties of the synthetic generators, checked over arbitrary seeds:
//! - Price snapshot coverage and trend classification
//! - Price history and forecast shape
//! - Recommendation ranking
//! - Weather and listing batches
//! - Reproducibility of seeded sources

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use shared::*;
use std::collections::HashSet;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Two independent snapshots cover the same pairs with different prices
    #[test]
    fn test_snapshots_differ_between_calls() {
        let mut rng = StdRng::seed_from_u64(2024);
        let first = generate_market_prices(&mut rng, now());
        let second = generate_market_prices(&mut rng, now());

        let pairs = |prices: &[PriceSnapshot]| -> Vec<(String, String)> {
            prices.iter().map(|p| (p.market.clone(), p.crop.clone())).collect()
        };
        assert_eq!(pairs(&first), pairs(&second));
        assert!(first.iter().zip(&second).any(|(a, b)| a.price != b.price));
    }

    #[test]
    fn test_forecast_step_one_band_for_price_100() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let predictions =
                generate_price_predictions(&mut rng, today(), Decimal::ONE_HUNDRED).unwrap();

            let first = predictions[0].predicted;
            assert!(first >= dec("96.9") && first <= dec("107.1"), "{first}");
            assert_eq!(predictions[0].date, today().succ_opt().unwrap());
        }
    }

    #[test]
    fn test_forecast_confidence_schedule() {
        let mut rng = StdRng::seed_from_u64(5);
        let predictions = generate_price_predictions(&mut rng, today(), dec("45")).unwrap();
        let confidence: Vec<u8> = predictions.iter().map(|p| p.confidence).collect();

        assert_eq!(confidence, [90, 85, 80, 75, 70, 65, 60]);
    }

    #[test]
    fn test_forecast_rejects_non_positive_price() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            generate_price_predictions(&mut rng, today(), Decimal::ZERO),
            Err(ModelError::NonPositivePrice(Decimal::ZERO))
        );
    }

    #[test]
    fn test_forecast_outlook_matches_predictions() {
        let mut rng = StdRng::seed_from_u64(8);
        let current = dec("45");
        let predictions = generate_price_predictions(&mut rng, today(), current).unwrap();
        let outlook = forecast_outlook(current, &predictions).unwrap();

        let last = predictions[6].predicted;
        let expected = if last > current {
            ForecastDirection::Increase
        } else {
            ForecastDirection::Decrease
        };
        assert_eq!(outlook.direction, expected);
        assert_eq!(outlook.confidence, 90);
        assert!(outlook.change_percent >= Decimal::ZERO);
    }

    #[test]
    fn test_zero_day_history_is_today_only() {
        let mut rng = StdRng::seed_from_u64(9);
        let history = generate_price_history(&mut rng, today(), "Tea", "Mombasa", 0).unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].date, today());
    }

    #[test]
    fn test_unknown_crop_history_uses_fallback_base_price() {
        let mut rng = StdRng::seed_from_u64(9);
        let history = generate_price_history(&mut rng, today(), "Quinoa", "Eldoret", 0).unwrap();

        // One ±7.5% step away from the 50 KES fallback
        assert!(history[0].price >= dec("46.2") && history[0].price <= dec("53.8"));
    }

    #[test]
    fn test_recommendations_for_unknown_crop_are_empty() {
        let mut rng = StdRng::seed_from_u64(10);
        assert!(generate_sell_recommendations(&mut rng, now(), "Quinoa").is_empty());
    }

    #[test]
    fn test_recommendation_rationale_by_rank() {
        let mut rng = StdRng::seed_from_u64(11);
        let recommendations = generate_sell_recommendations(&mut rng, now(), "Beans");

        assert_eq!(
            recommendations[0].reason,
            "Highest current price due to strong demand and limited supply"
        );
        assert_eq!(recommendations[1].demand_level, DemandLevel::Medium);
        assert_eq!(recommendations[2].demand_level, DemandLevel::Medium);
    }

    #[test]
    fn test_default_listing_batch_ids() {
        let mut rng = StdRng::seed_from_u64(12);
        let listings = generate_farmer_listings(&mut rng, now(), DEFAULT_LISTING_COUNT);
        let ids: Vec<String> = listings.iter().map(|l| l.id.clone()).collect();
        let expected: Vec<String> = (1..=20).map(|n| format!("listing-{n}")).collect();

        assert_eq!(ids, expected);
    }

    #[test]
    fn test_rain_alerts_are_a_subset_of_weather() {
        let mut rng = StdRng::seed_from_u64(13);
        let records = generate_weather_data(&mut rng);
        let report = RainAlertReport::from_records(&records);

        assert_eq!(report.count, report.counties.len());
        assert_eq!(report.summary.is_some(), report.count > 0);
        for county in &report.counties {
            assert!(COUNTIES.contains(&county.as_str()));
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every (market, crop) pair appears exactly once with a positive price
    #[test]
    fn prop_snapshot_covers_every_pair(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let prices = generate_market_prices(&mut rng, now());

        prop_assert_eq!(prices.len(), MARKETS.len() * CROPS.len());
        let pairs: HashSet<(&str, &str)> = prices
            .iter()
            .map(|p| (p.market.as_str(), p.crop.as_str()))
            .collect();
        prop_assert_eq!(pairs.len(), prices.len());

        for price in &prices {
            prop_assert!(price.price > Decimal::ZERO);
            prop_assert!(price.previous_price > Decimal::ZERO);
            prop_assert_eq!(price.unit.as_str(), "kg");
            prop_assert_eq!(price.last_updated, now());
        }
    }

    /// Trend agrees with the reported change
    #[test]
    fn prop_trend_matches_change(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for price in generate_market_prices(&mut rng, now()) {
            let expected = if price.change > Decimal::ONE {
                Trend::Up
            } else if price.change < -Decimal::ONE {
                Trend::Down
            } else {
                Trend::Stable
            };
            prop_assert_eq!(price.trend, expected);
        }
    }

    /// History has days + 1 consecutive dates ending today
    #[test]
    fn prop_history_is_contiguous(seed in any::<u64>(), days in 0u32..120) {
        let mut rng = StdRng::seed_from_u64(seed);
        let history = generate_price_history(&mut rng, today(), "Maize", "Nairobi", days).unwrap();

        prop_assert_eq!(history.len(), days as usize + 1);
        prop_assert_eq!(history.last().unwrap().date, today());
        for pair in history.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        for point in &history {
            prop_assert!(point.price >= Decimal::ZERO);
        }
    }

    /// Seven predictions, confidence non-increasing and floored, inside the compounded band
    #[test]
    fn prop_forecast_shape(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let predictions =
            generate_price_predictions(&mut rng, today(), Decimal::ONE_HUNDRED).unwrap();

        prop_assert_eq!(predictions.len(), 7);
        for pair in predictions.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }

        let (mut low, mut high) = (100.0_f64, 100.0_f64);
        for prediction in &predictions {
            low *= 0.97;
            high *= 1.07;
            let predicted = to_f64(prediction.predicted);
            prop_assert!(prediction.confidence >= 50);
            prop_assert!(predicted >= low - 0.051 && predicted <= high + 0.051);
        }
    }

    /// At most three recommendations, best price first, top market in high demand
    #[test]
    fn prop_recommendations_are_ranked(seed in any::<u64>(), crop_index in 0usize..18) {
        let mut rng = StdRng::seed_from_u64(seed);
        let crop = CROPS[crop_index];
        let recommendations = generate_sell_recommendations(&mut rng, now(), crop);

        prop_assert_eq!(recommendations.len(), 3);
        for pair in recommendations.windows(2) {
            prop_assert!(pair[0].best_price >= pair[1].best_price);
        }
        prop_assert_eq!(recommendations[0].demand_level, DemandLevel::High);
        for recommendation in &recommendations {
            prop_assert_eq!(recommendation.crop.as_str(), crop);
            prop_assert!(MARKETS.contains(&recommendation.recommended_market.as_str()));
        }
    }

    /// One weather record per county, metrics within range
    #[test]
    fn prop_weather_covers_every_county(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = generate_weather_data(&mut rng);

        prop_assert_eq!(records.len(), 47);
        let counties: Vec<&str> = records.iter().map(|r| r.county.as_str()).collect();
        prop_assert_eq!(counties, COUNTIES.to_vec());

        for record in &records {
            prop_assert!((18..33).contains(&record.temperature_celsius));
            prop_assert!((40..90).contains(&record.humidity_percent));
            prop_assert!((5..20).contains(&record.wind_speed_kmh));
            prop_assert!(record.rainfall_mm >= Decimal::ZERO && record.rainfall_mm <= dec("30"));
        }
    }

    /// Listings carry unique sequential ids and valid Kenyan phone numbers
    #[test]
    fn prop_listings_are_well_formed(seed in any::<u64>(), count in 0usize..50) {
        let mut rng = StdRng::seed_from_u64(seed);
        let listings = generate_farmer_listings(&mut rng, now(), count);

        prop_assert_eq!(listings.len(), count);
        for (index, listing) in listings.iter().enumerate() {
            prop_assert_eq!(&listing.id, &format!("listing-{}", index + 1));
            prop_assert!(validate_kenyan_phone(&listing.phone).is_ok());
            prop_assert!((100..2100).contains(&listing.quantity));
            prop_assert!(listing.available_from >= now());
            prop_assert!(COUNTIES.contains(&listing.county.as_str()));
            prop_assert!(CROPS.contains(&listing.crop.as_str()));
        }
    }

    /// The same seed reproduces every generator's output
    #[test]
    fn prop_seeded_sources_are_reproducible(seed in any::<u64>()) {
        let mut a = StdRng::seed_from_u64(seed);
        let mut b = StdRng::seed_from_u64(seed);

        prop_assert_eq!(
            generate_market_prices(&mut a, now()),
            generate_market_prices(&mut b, now())
        );
        prop_assert_eq!(generate_weather_data(&mut a), generate_weather_data(&mut b));
        prop_assert_eq!(
            generate_farmer_listings(&mut a, now(), 20),
            generate_farmer_listings(&mut b, now(), 20)
        );
        prop_assert_eq!(
            generate_price_history(&mut a, today(), "Coffee", "Kisumu", 30),
            generate_price_history(&mut b, today(), "Coffee", "Kisumu", 30)
        );
    }
}
