//! Identity provider availability for the dashboard

use axum::{extract::State, Json};
use serde::Serialize;
use shared::AuthMode;

use crate::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub mode: AuthMode,
}

/// Tells the dashboard whether to offer sign in or run in demo mode
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        mode: state.auth_mode,
    })
}
