//! HTTP handlers for the farmer marketplace

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use shared::{
    listing_counties, listing_crops, validate_county, validate_crop, FarmerListing,
    ListingFilter,
};

use super::check_field;
use crate::error::AppResult;
use crate::AppState;

/// Filtered listings plus the dropdown options of the whole batch
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<FarmerListing>,
    pub crops: Vec<String>,
    pub counties: Vec<String>,
}

pub async fn list_listings(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> AppResult<Json<ListingsResponse>> {
    if let Some(crop) = &filter.crop {
        check_field(validate_crop(crop), "crop", "Zao halijulikani")?;
    }
    if let Some(county) = &filter.county {
        check_field(validate_county(county), "county", "Kaunti haijulikani")?;
    }

    let batch = state.feed.farmer_listings()?;
    Ok(Json(ListingsResponse {
        listings: filter.apply(&batch).into_iter().cloned().collect(),
        crops: listing_crops(&batch),
        counties: listing_counties(&batch),
    }))
}
