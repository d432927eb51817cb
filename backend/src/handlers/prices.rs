//! HTTP handlers for market price endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{
    filter_market_prices, validate_crop, validate_history_days, validate_market,
    PriceHistoryPoint, PriceSnapshot, DEFAULT_HISTORY_DAYS, MARKETS,
};

use super::check_field;
use crate::error::AppResult;
use crate::AppState;

/// Query parameters for the price board
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub market: Option<String>,
    #[serde(default)]
    pub search: String,
}

/// Current prices, optionally narrowed to one market and a crop search
pub async fn list_prices(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> AppResult<Json<Vec<PriceSnapshot>>> {
    if let Some(market) = &query.market {
        check_field(validate_market(market), "market", "Soko halijulikani")?;
    }

    let prices = state.feed.market_prices()?;
    let markets: Vec<&str> = match &query.market {
        Some(market) => vec![market.as_str()],
        None => MARKETS.to_vec(),
    };

    let selected = markets
        .into_iter()
        .flat_map(|market| filter_market_prices(&prices, market, &query.search))
        .cloned()
        .collect();
    Ok(Json(selected))
}

/// Query parameters for a price history chart
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub crop: String,
    pub market: String,
    pub days: Option<u32>,
}

/// Daily price history for one crop at one market
pub async fn get_price_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<PriceHistoryPoint>>> {
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);

    check_field(validate_crop(&query.crop), "crop", "Zao halijulikani")?;
    check_field(validate_market(&query.market), "market", "Soko halijulikani")?;
    check_field(
        validate_history_days(days, state.config.model.max_history_days),
        "days",
        "Kipindi cha historia ni kirefu mno",
    )?;

    let history = state.feed.price_history(&query.crop, &query.market, days)?;
    Ok(Json(history))
}
