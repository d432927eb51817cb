//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::AuthMode;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub auth_mode: AuthMode,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        auth_mode: state.auth_mode,
    })
}
