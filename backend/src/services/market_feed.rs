//! Shared market model behind the HTTP feed
//!
//! One seeded or entropy-backed [`MarketModel`] serves every request. The
//! lock is held for a single generator call and never across an `.await`.

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rust_decimal::Decimal;
use shared::{
    FarmerListing, MarketModel, NewsItem, PriceHistoryPoint, PricePrediction, PriceSnapshot,
    SellRecommendation, WeatherRecord,
};

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

/// Market feed service wrapping the synthetic market model
pub struct MarketFeed {
    model: Mutex<MarketModel<StdRng>>,
    listing_count: usize,
}

impl MarketFeed {
    pub fn new(model: MarketModel<StdRng>, listing_count: usize) -> Self {
        Self {
            model: Mutex::new(model),
            listing_count,
        }
    }

    /// Build the feed from configuration, seeding from entropy when no seed is set
    pub fn from_config(config: &ModelConfig) -> Self {
        let model = match config.seed {
            Some(seed) => {
                tracing::info!("Market model seeded with {}", seed);
                MarketModel::seeded(seed)
            }
            None => {
                tracing::info!("Market model seeded from entropy");
                MarketModel::from_entropy()
            }
        };
        Self::new(model, config.listing_count)
    }

    fn model(&self) -> AppResult<MutexGuard<'_, MarketModel<StdRng>>> {
        self.model
            .lock()
            .map_err(|_| AppError::Internal("Market model lock poisoned".to_string()))
    }

    /// Fresh snapshot of every (market, crop) price
    pub fn market_prices(&self) -> AppResult<Vec<PriceSnapshot>> {
        let prices = self.model()?.market_prices();
        tracing::debug!("Generated {} price snapshots", prices.len());
        Ok(prices)
    }

    /// Daily price history ending today
    pub fn price_history(
        &self,
        crop: &str,
        market: &str,
        days: u32,
    ) -> AppResult<Vec<PriceHistoryPoint>> {
        let history = self.model()?.price_history(crop, market, days)?;
        tracing::debug!("Generated {} history points for {} in {}", history.len(), crop, market);
        Ok(history)
    }

    /// Seven-day forecast starting from `current_price`
    pub fn price_predictions(&self, current_price: Decimal) -> AppResult<Vec<PricePrediction>> {
        Ok(self.model()?.price_predictions(current_price)?)
    }

    /// Best markets to sell `crop` in, from a fresh snapshot
    pub fn sell_recommendations(&self, crop: &str) -> AppResult<Vec<SellRecommendation>> {
        Ok(self.model()?.sell_recommendations(crop))
    }

    /// One weather record per county
    pub fn weather_data(&self) -> AppResult<Vec<WeatherRecord>> {
        Ok(self.model()?.weather_data())
    }

    /// Marketplace listings, batch size from configuration
    pub fn farmer_listings(&self) -> AppResult<Vec<FarmerListing>> {
        let listings = self.model()?.farmer_listings(self.listing_count);
        tracing::debug!("Generated {} farmer listings", listings.len());
        Ok(listings)
    }

    /// Curated agricultural news
    pub fn news(&self) -> AppResult<Vec<NewsItem>> {
        Ok(self.model()?.news())
    }
}
