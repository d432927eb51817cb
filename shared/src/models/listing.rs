//! Farmer marketplace listing models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Produce offered for sale by a farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmerListing {
    /// `listing-{n}`, unique within one generated batch only
    pub id: String,
    pub farmer_name: String,
    pub county: String,
    pub crop: String,
    pub quantity: u32,
    pub unit: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_unit: Decimal,
    pub phone: String,
    pub description: String,
    pub available_from: DateTime<Utc>,
    pub organic: bool,
}
