//! Error types for the market model

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by generators and derived analytics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Current price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("A window of {days} days falls outside the supported calendar")]
    DateOutOfRange { days: u64 },

    #[error("Forecast contains no predictions")]
    EmptyForecast,
}

/// Errors raised by the dashboard session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Identity provider is not configured")]
    NotConfigured,

    #[error("Sign in required")]
    SignInRequired,
}

/// Errors raised by a preference store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}
