//! Selling recommendation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::DemandLevel;

/// Where a farmer should sell a crop and why
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellRecommendation {
    pub crop: String,
    pub recommended_market: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub best_price: Decimal,
    pub reason: String,
    pub demand_level: DemandLevel,
}
