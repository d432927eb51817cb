//! Best-market selling recommendations

use chrono::{DateTime, Utc};
use rand::Rng;

use super::prices::generate_market_prices;
use crate::models::{PriceSnapshot, SellRecommendation};
use crate::types::DemandLevel;

/// Maximum number of markets recommended for a crop
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Rank the markets in `snapshot` by price for `crop`, best first
///
/// Ties keep the reference market order. A crop with no prices in the
/// snapshot yields no recommendations rather than a default market.
pub fn rank_sell_recommendations(
    snapshot: &[PriceSnapshot],
    crop: &str,
) -> Vec<SellRecommendation> {
    let mut candidates: Vec<&PriceSnapshot> =
        snapshot.iter().filter(|price| price.crop == crop).collect();
    candidates.sort_by(|a, b| b.price.cmp(&a.price));

    candidates
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(rank, price)| {
            let (reason, demand_level) = rationale(rank);
            SellRecommendation {
                crop: crop.to_string(),
                recommended_market: price.market.clone(),
                best_price: price.price,
                reason: reason.to_string(),
                demand_level,
            }
        })
        .collect()
}

/// Rank a freshly generated snapshot for `crop`
pub fn generate_sell_recommendations<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    crop: &str,
) -> Vec<SellRecommendation> {
    let snapshot = generate_market_prices(rng, now);
    let recommendations = rank_sell_recommendations(&snapshot, crop);
    if recommendations.is_empty() {
        tracing::debug!(crop, "no market prices for crop; nothing to recommend");
    }
    recommendations
}

fn rationale(rank: usize) -> (&'static str, DemandLevel) {
    match rank {
        0 => (
            "Highest current price due to strong demand and limited supply",
            DemandLevel::High,
        ),
        1 => (
            "Good price with consistent demand. Lower transportation costs than top market",
            DemandLevel::Medium,
        ),
        _ => (
            "Stable market with reliable buyers. Good alternative for bulk sales",
            DemandLevel::Medium,
        ),
    }
}
