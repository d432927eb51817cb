//! Mavuno Market Feed - Backend Server
//!
//! Serves synthetic Kenyan agricultural market data (prices, forecasts,
//! weather, marketplace listings and news) to the Mavuno dashboard.

use axum::{routing::get, Router};
use shared::AuthMode;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use services::MarketFeed;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub feed: Arc<MarketFeed>,
    pub auth_mode: AuthMode,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            auth_mode: config.identity.mode(),
            feed: Arc::new(MarketFeed::from_config(&config.model)),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mavuno_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Mavuno Market Feed");
    tracing::info!("Environment: {}", config.environment);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config);
    match state.auth_mode {
        AuthMode::Configured => tracing::info!("Identity provider configured"),
        AuthMode::Unconfigured => {
            tracing::info!("Identity provider not configured, running in demo mode")
        }
    }

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Mavuno Market Feed API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
