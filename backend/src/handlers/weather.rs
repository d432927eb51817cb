//! HTTP handlers for county weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{filter_weather, RainAlertReport, WeatherRecord};

use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub search: String,
}

/// Weather for every county, optionally narrowed by a county search
pub async fn list_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<Vec<WeatherRecord>>> {
    let records = state.feed.weather_data()?;
    let selected = filter_weather(&records, &query.search)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(selected))
}

/// Counties expecting heavy rain
pub async fn get_rain_alerts(State(state): State<AppState>) -> AppResult<Json<RainAlertReport>> {
    let records = state.feed.weather_data()?;
    Ok(Json(RainAlertReport::from_records(&records)))
}
