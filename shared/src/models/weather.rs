//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current weather and farming advisory for a county
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherRecord {
    pub county: String,
    pub temperature_celsius: i32,
    pub condition: WeatherCondition,
    pub humidity_percent: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub rainfall_mm: Decimal,
    pub wind_speed_kmh: i32,
    pub forecast: String,
    pub advisory: String,
}

/// Sky conditions reported by the weather feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Clear,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Clear,
    ];
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "Sunny"),
            WeatherCondition::PartlyCloudy => write!(f, "Partly Cloudy"),
            WeatherCondition::Cloudy => write!(f, "Cloudy"),
            WeatherCondition::Rainy => write!(f, "Rainy"),
            WeatherCondition::Clear => write!(f, "Clear"),
        }
    }
}
