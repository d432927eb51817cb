//! Market price models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Trend;

/// Current price of one crop at one market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceSnapshot {
    pub crop: String,
    pub market: String,
    /// Whole shillings per unit
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub previous_price: Decimal,
    /// Percent change from the previous price, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
    pub unit: String,
}

/// One day of a historical price series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceHistoryPoint {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// One step of a forward price projection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePrediction {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub predicted: Decimal,
    /// Synthetic confidence in percent, not a statistical measure
    pub confidence: u8,
}

/// Whether the forecast ends above or below today's price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ForecastDirection {
    Increase,
    Decrease,
}

impl std::fmt::Display for ForecastDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastDirection::Increase => write!(f, "increase"),
            ForecastDirection::Decrease => write!(f, "decrease"),
        }
    }
}

/// Headline summary of a 7-day forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastOutlook {
    pub direction: ForecastDirection,
    /// Absolute percent change between today and the last forecast day
    #[serde(with = "rust_decimal::serde::float")]
    pub change_percent: Decimal,
    pub confidence: u8,
}

impl ForecastOutlook {
    /// Render the outlook as dashboard copy for a crop
    pub fn narrative(&self, crop: &str) -> String {
        format!(
            "Prices for {} are expected to {} by {:.1}% over the next 7 days. Model confidence: {}%",
            crop, self.direction, self.change_percent, self.confidence
        )
    }
}
