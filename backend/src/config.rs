//! Configuration management for the Mavuno market feed
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with MAVUNO__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{IdentityProviderConfig, DEFAULT_LISTING_COUNT, MAX_HISTORY_DAYS};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Identity provider settings handed to the dashboard
    #[serde(default)]
    pub identity: IdentityProviderConfig,

    /// Synthetic market model settings
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Fixed seed for reproducible feeds; entropy when absent
    pub seed: Option<u64>,

    /// Longest price history window a client may request
    pub max_history_days: u32,

    /// Number of marketplace listings generated per request
    pub listing_count: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("MAVUNO__ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("model.max_history_days", i64::from(MAX_HISTORY_DAYS))?
            .set_default("model.listing_count", DEFAULT_LISTING_COUNT as i64)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (MAVUNO__ prefix)
            .add_source(
                Environment::with_prefix("MAVUNO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            identity: IdentityProviderConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_history_days: MAX_HISTORY_DAYS,
            listing_count: DEFAULT_LISTING_COUNT,
        }
    }
}
