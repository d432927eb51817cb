//! HTTP handlers for price forecasts and selling recommendations

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    forecast_outlook, rank_sell_recommendations, reference_price, validate_crop,
    ForecastOutlook, PricePrediction, SellRecommendation,
};

use super::check_field;
use crate::error::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CropQuery {
    pub crop: String,
}

/// Everything the insights page shows for one crop
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub crop: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_price: Decimal,
    pub predictions: Vec<PricePrediction>,
    pub outlook: ForecastOutlook,
    pub narrative: String,
    pub recommendations: Vec<SellRecommendation>,
}

/// Forecast and best markets for a crop, all drawn from one price snapshot
pub async fn get_insights(
    State(state): State<AppState>,
    Query(query): Query<CropQuery>,
) -> AppResult<Json<InsightsResponse>> {
    check_field(validate_crop(&query.crop), "crop", "Zao halijulikani")?;

    let prices = state.feed.market_prices()?;
    let current_price = reference_price(&prices, &query.crop);
    let predictions = state.feed.price_predictions(current_price)?;
    let outlook = forecast_outlook(current_price, &predictions)?;
    let recommendations = rank_sell_recommendations(&prices, &query.crop);

    Ok(Json(InsightsResponse {
        narrative: outlook.narrative(&query.crop),
        crop: query.crop,
        current_price,
        predictions,
        outlook,
        recommendations,
    }))
}

/// Top markets to sell a crop in; unknown crops yield an empty list
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<CropQuery>,
) -> AppResult<Json<Vec<SellRecommendation>>> {
    let recommendations = state.feed.sell_recommendations(&query.crop)?;
    Ok(Json(recommendations))
}
