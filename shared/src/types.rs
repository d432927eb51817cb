//! Common types used across the platform

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Direction of a price movement relative to the previous observation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Percent change beyond which a move counts as up or down
    pub const THRESHOLD_PERCENT: Decimal = Decimal::ONE;

    /// Classify a percent change: above +1 is up, below -1 is down
    pub fn from_change(change_percent: Decimal) -> Self {
        if change_percent > Self::THRESHOLD_PERCENT {
            Trend::Up
        } else if change_percent < -Self::THRESHOLD_PERCENT {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Buyer demand attached to a selling recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

/// News feed categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Policy,
    Fuel,
    Climate,
    Subsidy,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Policy => "policy",
            NewsCategory::Fuel => "fuel",
            NewsCategory::Climate => "climate",
            NewsCategory::Subsidy => "subsidy",
        }
    }
}

impl std::str::FromStr for NewsCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "policy" => Ok(NewsCategory::Policy),
            "fuel" => Ok(NewsCategory::Fuel),
            "climate" => Ok(NewsCategory::Climate),
            "subsidy" => Ok(NewsCategory::Subsidy),
            _ => Err("Unknown news category"),
        }
    }
}

/// Round a generated value to `dp` decimal places, half away from zero
pub fn round_dp(value: f64, dp: u32) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Lossy conversion used where a decimal seeds floating point arithmetic
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
