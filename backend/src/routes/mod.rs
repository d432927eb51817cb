//! Route definitions for the Mavuno market feed

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/catalog", get(handlers::get_catalog))
        .route("/session", get(handlers::get_session))
        .nest("/prices", price_routes())
        .route("/insights", get(handlers::get_insights))
        .route("/recommendations", get(handlers::get_recommendations))
        .nest("/weather", weather_routes())
        .route("/listings", get(handlers::list_listings))
        .route("/news", get(handlers::list_news))
}

/// Market price routes
fn price_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_prices))
        .route("/history", get(handlers::get_price_history))
}

/// County weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_weather))
        .route("/alerts", get(handlers::get_rain_alerts))
}
