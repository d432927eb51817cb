//! Reference tables for dashboard dropdowns

use axum::Json;
use serde::Serialize;
use shared::{COUNTIES, CROPS, MARKETS};

#[derive(Serialize)]
pub struct CatalogResponse {
    pub markets: &'static [&'static str],
    pub counties: &'static [&'static str],
    pub crops: &'static [&'static str],
}

pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        markets: &MARKETS,
        counties: &COUNTIES,
        crops: &CROPS,
    })
}
