//! Synthetic market data generators
//!
//! Every generator is a pure function of its inputs, an explicit random
//! source and, where dates are involved, an explicit clock value. Seeding the
//! source with [`rand::SeedableRng::seed_from_u64`] makes every output
//! reproducible.
//!
//! [`MarketModel`] bundles a random source with the system clock for callers
//! that just want "today's" data.

mod forecast;
mod history;
mod listings;
mod prices;
mod recommendations;
mod weather;

pub use forecast::*;
pub use history::*;
pub use listings::*;
pub use prices::*;
pub use recommendations::*;
pub use weather::*;

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::error::ModelError;
use crate::models::{
    agricultural_news, FarmerListing, NewsItem, PriceHistoryPoint, PricePrediction,
    PriceSnapshot, SellRecommendation, WeatherRecord,
};

/// A random source paired with the wall clock
pub struct MarketModel<R: Rng = StdRng> {
    rng: R,
}

impl MarketModel<StdRng> {
    /// Reproducible model; the same seed yields the same data
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Model seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MarketModel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn today() -> NaiveDate {
        Self::now().date_naive()
    }

    pub fn market_prices(&mut self) -> Vec<PriceSnapshot> {
        generate_market_prices(&mut self.rng, Self::now())
    }

    pub fn price_history(
        &mut self,
        crop: &str,
        market: &str,
        days: u32,
    ) -> Result<Vec<PriceHistoryPoint>, ModelError> {
        generate_price_history(&mut self.rng, Self::today(), crop, market, days)
    }

    pub fn price_predictions(
        &mut self,
        current_price: Decimal,
    ) -> Result<Vec<PricePrediction>, ModelError> {
        generate_price_predictions(&mut self.rng, Self::today(), current_price)
    }

    pub fn sell_recommendations(&mut self, crop: &str) -> Vec<SellRecommendation> {
        generate_sell_recommendations(&mut self.rng, Self::now(), crop)
    }

    pub fn weather_data(&mut self) -> Vec<WeatherRecord> {
        generate_weather_data(&mut self.rng)
    }

    pub fn farmer_listings(&mut self, count: usize) -> Vec<FarmerListing> {
        generate_farmer_listings(&mut self.rng, Self::now(), count)
    }

    pub fn news(&self) -> Vec<NewsItem> {
        agricultural_news(Self::now())
    }
}
