//! Market price snapshot generator

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::catalog::{base_price, market_multiplier, CROPS, MARKETS, PRICE_UNIT};
use crate::models::PriceSnapshot;
use crate::types::{round_dp, Trend};

/// Spread of the current price around the market-adjusted base price
const PRICE_VARIANCE: f64 = 0.10;
/// Spread of the previous price around the current price
const PREVIOUS_PRICE_VARIANCE: f64 = 0.05;

/// Generate one price record per (market, crop) pair, market-major
pub fn generate_market_prices<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<PriceSnapshot> {
    let mut prices = Vec::with_capacity(MARKETS.len() * CROPS.len());

    for market in MARKETS {
        let multiplier = market_multiplier(market);
        for crop in CROPS {
            let variance = rng.gen_range(-PRICE_VARIANCE..PRICE_VARIANCE);
            let price = (base_price(crop) * multiplier * (1.0 + variance)).round();

            let drift = rng.gen_range(-PREVIOUS_PRICE_VARIANCE..PREVIOUS_PRICE_VARIANCE);
            let previous_price = (price * (1.0 + drift)).round();

            // Trend is classified on the reported value so the two never disagree
            let change = round_dp((price - previous_price) / previous_price * 100.0, 1);

            prices.push(PriceSnapshot {
                crop: crop.to_string(),
                market: market.to_string(),
                price: round_dp(price, 0),
                previous_price: round_dp(previous_price, 0),
                change,
                trend: Trend::from_change(change),
                last_updated: now,
                unit: PRICE_UNIT.to_string(),
            });
        }
    }

    tracing::debug!(records = prices.len(), "generated market price snapshot");
    prices
}
