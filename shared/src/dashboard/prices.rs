//! Market prices page

use rust_decimal::Decimal;

use super::matches_query;
use crate::catalog::{FALLBACK_BASE_PRICE, REFERENCE_MARKET};
use crate::models::PriceSnapshot;

/// Prices at one market whose crop name contains `query`
pub fn filter_market_prices<'a>(
    prices: &'a [PriceSnapshot],
    market: &str,
    query: &str,
) -> Vec<&'a PriceSnapshot> {
    prices
        .iter()
        .filter(|price| price.market == market && matches_query(&price.crop, query))
        .collect()
}

/// Today's Nairobi price for `crop`, the starting point of its forecast
pub fn reference_price(prices: &[PriceSnapshot], crop: &str) -> Decimal {
    prices
        .iter()
        .find(|price| price.crop == crop && price.market == REFERENCE_MARKET)
        .map(|price| price.price)
        .unwrap_or_else(|| Decimal::from_f64_retain(FALLBACK_BASE_PRICE).unwrap_or(Decimal::ONE))
}
