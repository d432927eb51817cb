//! County weather generator

use rand::Rng;

use crate::catalog::{CLEAR_FORECAST, COUNTIES, FARMING_ADVISORIES, RAIN_FORECAST};
use crate::models::{WeatherCondition, WeatherRecord};
use crate::types::round_dp;

/// Generate one weather record per county, in county order
///
/// The advisory is drawn independently of the condition and rainfall, so a
/// "Sunny" record may carry a heavy-rain advisory.
pub fn generate_weather_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<WeatherRecord> {
    COUNTIES
        .iter()
        .map(|county| {
            let condition = WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())];
            let temperature_celsius = rng.gen_range(18..33);
            let humidity_percent = rng.gen_range(40..90);
            let rainfall_mm = round_dp(rng.gen_range(0.0..30.0), 1);
            let wind_speed_kmh = rng.gen_range(5..20);
            let forecast = if rng.gen_bool(0.5) {
                RAIN_FORECAST
            } else {
                CLEAR_FORECAST
            };
            let advisory = FARMING_ADVISORIES[rng.gen_range(0..FARMING_ADVISORIES.len())];

            WeatherRecord {
                county: county.to_string(),
                temperature_celsius,
                condition,
                humidity_percent,
                rainfall_mm,
                wind_speed_kmh,
                forecast: forecast.to_string(),
                advisory: advisory.to_string(),
            }
        })
        .collect()
}
