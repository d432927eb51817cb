//! WebAssembly module for the Mavuno dashboard
//!
//! Runs the synthetic market model in the browser. Every method returns JSON
//! so the host page can render it directly:
//! - Market prices, history, forecasts and selling recommendations
//! - County weather and rain alerts
//! - Farmer marketplace listings and WhatsApp contact links
//! - Agricultural news
//! - Session state and the light/dark theme preference

use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    filter_market_prices, filter_news, filter_weather, forecast_outlook, listing_counties,
    listing_crops, rank_sell_recommendations, reference_price, validate_current_price,
    validate_history_days, AuthMode, FarmerListing, ForecastOutlook, ListingFilter, MarketModel,
    NewsCategory, PricePrediction, RainAlertReport, SellRecommendation, Session, SessionUser,
    Theme, DEFAULT_LISTING_COUNT, MARKETS, MAX_HISTORY_DAYS,
};
use wasm_bindgen::prelude::*;

mod storage;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Everything the insights page shows for one crop
#[derive(Serialize)]
struct Insights {
    crop: String,
    #[serde(with = "rust_decimal::serde::float")]
    current_price: Decimal,
    predictions: Vec<PricePrediction>,
    outlook: ForecastOutlook,
    narrative: String,
    recommendations: Vec<SellRecommendation>,
}

#[derive(Serialize)]
struct Listings<'a> {
    listings: Vec<&'a FarmerListing>,
    crops: Vec<String>,
    counties: Vec<String>,
}

#[derive(Serialize)]
struct Catalog {
    markets: &'static [&'static str],
    counties: &'static [&'static str],
    crops: &'static [&'static str],
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|e| JsValue::from_str(&e))
}

/// Dashboard state living in the browser tab
#[wasm_bindgen]
pub struct MavunoDashboard {
    model: MarketModel<StdRng>,
    session: Session,
    theme: Theme,
}

impl MavunoDashboard {
    fn create(identity_configured: bool, seed: Option<u64>) -> Self {
        let mode = if identity_configured {
            AuthMode::Configured
        } else {
            AuthMode::Unconfigured
        };
        let model = match seed {
            Some(seed) => MarketModel::seeded(seed),
            None => MarketModel::from_entropy(),
        };
        Self {
            model,
            session: Session::new(mode),
            theme: Theme::default(),
        }
    }

    fn market_prices_json(&mut self, market: Option<&str>, search: &str) -> Result<String, String> {
        let prices = self.model.market_prices();
        let selected: Vec<_> = match market {
            Some(market) => filter_market_prices(&prices, market, search),
            None => MARKETS
                .iter()
                .flat_map(|market| filter_market_prices(&prices, market, search))
                .collect(),
        };
        to_json(&selected)
    }

    fn price_history_json(
        &mut self,
        crop: &str,
        market: &str,
        days: u32,
    ) -> Result<String, String> {
        validate_history_days(days, MAX_HISTORY_DAYS)?;
        let history = self
            .model
            .price_history(crop, market, days)
            .map_err(|e| e.to_string())?;
        to_json(&history)
    }

    fn predictions_json(&mut self, current_price: f64) -> Result<String, String> {
        let current_price = Decimal::try_from(current_price).unwrap_or(Decimal::ZERO);
        validate_current_price(current_price)?;
        let predictions = self
            .model
            .price_predictions(current_price)
            .map_err(|e| e.to_string())?;
        to_json(&predictions)
    }

    fn insights_json(&mut self, crop: &str) -> Result<String, String> {
        let prices = self.model.market_prices();
        let current_price = reference_price(&prices, crop);
        let predictions = self
            .model
            .price_predictions(current_price)
            .map_err(|e| e.to_string())?;
        let outlook = forecast_outlook(current_price, &predictions).map_err(|e| e.to_string())?;

        to_json(&Insights {
            crop: crop.to_string(),
            current_price,
            narrative: outlook.narrative(crop),
            predictions,
            outlook,
            recommendations: rank_sell_recommendations(&prices, crop),
        })
    }

    fn listings_json(&mut self, filter_json: &str) -> Result<String, String> {
        let filter: ListingFilter = if filter_json.trim().is_empty() {
            ListingFilter::default()
        } else {
            serde_json::from_str(filter_json).map_err(|e| format!("Invalid filter JSON: {}", e))?
        };
        let batch = self.model.farmer_listings(DEFAULT_LISTING_COUNT);

        to_json(&Listings {
            listings: filter.apply(&batch),
            crops: listing_crops(&batch),
            counties: listing_counties(&batch),
        })
    }

    fn news_json(&self, category: Option<&str>) -> Result<String, String> {
        let category = category
            .map(str::parse::<NewsCategory>)
            .transpose()
            .map_err(str::to_string)?;
        let items = self.model.news();
        to_json(&filter_news(&items, category))
    }

    fn sign_in_json(&mut self, user_json: &str) -> Result<String, String> {
        let user: SessionUser =
            serde_json::from_str(user_json).map_err(|e| format!("Invalid user JSON: {}", e))?;
        let user = self.session.establish(user).map_err(|e| e.to_string())?;
        to_json(user)
    }

    fn contact_link_for(&self, listing_json: &str) -> Result<String, String> {
        let listing: FarmerListing = serde_json::from_str(listing_json)
            .map_err(|e| format!("Invalid listing JSON: {}", e))?;
        shared::contact_link(&self.session, &listing).map_err(|e| e.to_string())
    }
}

#[wasm_bindgen]
impl MavunoDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new(identity_configured: bool, seed: Option<u64>) -> MavunoDashboard {
        Self::create(identity_configured, seed)
    }

    /// Reference tables for dropdowns
    pub fn catalog(&self) -> Result<String, JsValue> {
        to_js(to_json(&Catalog {
            markets: &MARKETS,
            counties: &shared::COUNTIES,
            crops: &shared::CROPS,
        }))
    }

    /// Current prices, optionally for one market, filtered by crop search
    pub fn market_prices(
        &mut self,
        market: Option<String>,
        search: String,
    ) -> Result<String, JsValue> {
        to_js(self.market_prices_json(market.as_deref(), &search))
    }

    /// Daily history ending today, at most a year long
    pub fn price_history(
        &mut self,
        crop: &str,
        market: &str,
        days: u32,
    ) -> Result<String, JsValue> {
        to_js(self.price_history_json(crop, market, days))
    }

    /// Seven-day forecast from a price the user entered
    pub fn price_predictions(&mut self, current_price: f64) -> Result<String, JsValue> {
        to_js(self.predictions_json(current_price))
    }

    /// Forecast, outlook and best markets for a crop
    pub fn insights(&mut self, crop: &str) -> Result<String, JsValue> {
        to_js(self.insights_json(crop))
    }

    pub fn sell_recommendations(&mut self, crop: &str) -> Result<String, JsValue> {
        to_js(to_json(&self.model.sell_recommendations(crop)))
    }

    pub fn weather(&mut self, search: String) -> Result<String, JsValue> {
        let records = self.model.weather_data();
        to_js(to_json(&filter_weather(&records, &search)))
    }

    pub fn rain_alerts(&mut self) -> Result<String, JsValue> {
        let records = self.model.weather_data();
        to_js(to_json(&RainAlertReport::from_records(&records)))
    }

    /// Listings matching a `{search, crop, county}` filter
    pub fn listings(&mut self, filter_json: &str) -> Result<String, JsValue> {
        to_js(self.listings_json(filter_json))
    }

    pub fn news(&self, category: Option<String>) -> Result<String, JsValue> {
        to_js(self.news_json(category.as_deref()))
    }

    /// Whether sign in is offered at all
    pub fn identity_configured(&self) -> bool {
        self.session.mode() == AuthMode::Configured
    }

    /// Record the user returned by the identity provider popup
    pub fn sign_in_with(&mut self, user_json: &str) -> Result<String, JsValue> {
        to_js(self.sign_in_json(user_json))
    }

    pub fn sign_out(&mut self) -> Result<(), JsValue> {
        self.session
            .sign_out()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Signed-in user as JSON, if any
    pub fn user(&self) -> Option<String> {
        self.session.user().and_then(|user| to_json(user).ok())
    }

    /// WhatsApp link for a listing; requires a signed-in user
    pub fn contact_link(&self, listing_json: &str) -> Result<String, JsValue> {
        to_js(self.contact_link_for(listing_json))
    }

    /// Load the saved theme (or the system preference) and apply it
    pub fn theme(&mut self) -> String {
        let loaded = storage::LocalStorage::open()
            .and_then(|store| shared::load_theme(&store, storage::prefers_dark()));
        match loaded {
            Ok(theme) => self.theme = theme,
            Err(err) => storage::warn(&format!("Theme preference unavailable: {}", err)),
        }
        storage::apply_theme(self.theme);
        self.theme.as_str().to_string()
    }

    /// Flip between light and dark, persisting the choice
    pub fn toggle_theme(&mut self) -> String {
        let toggled = storage::LocalStorage::open()
            .and_then(|mut store| shared::toggle_theme(&mut store, self.theme));
        self.theme = match toggled {
            Ok(theme) => theme,
            Err(err) => {
                storage::warn(&format!("Failed to save theme preference: {}", err));
                self.theme.toggled()
            }
        };
        storage::apply_theme(self.theme);
        self.theme.as_str().to_string()
    }
}

/// Format an amount as `KES 1,234.50`
#[wasm_bindgen]
pub fn format_kes(amount: f64) -> String {
    shared::format_kes(Decimal::try_from(amount).unwrap_or(Decimal::ZERO))
}

/// Validate a Kenyan mobile number
#[wasm_bindgen]
pub fn is_valid_kenyan_phone(phone: &str) -> bool {
    shared::validate_kenyan_phone(phone).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn dashboard(identity_configured: bool) -> MavunoDashboard {
        MavunoDashboard::create(identity_configured, Some(42))
    }

    const USER_JSON: &str = r#"{
        "uid": "u-1",
        "email": "amina@example.com",
        "display_name": "Amina",
        "photo_url": null
    }"#;

    #[test]
    fn test_market_prices_for_one_market() {
        let json = dashboard(false).market_prices_json(Some("Meru"), "").unwrap();
        let prices: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(prices.len(), 18);
        assert!(prices.iter().all(|p| p["market"] == "Meru"));
    }

    #[test]
    fn test_price_history_window_is_capped() {
        let mut dashboard = dashboard(false);
        let json = dashboard.price_history_json("Maize", "Nairobi", 7).unwrap();
        let history: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), 8);

        assert!(dashboard
            .price_history_json("Maize", "Nairobi", MAX_HISTORY_DAYS)
            .is_ok());
        assert!(dashboard
            .price_history_json("Maize", "Nairobi", 50_000_000)
            .is_err());
    }

    #[test]
    fn test_predictions_require_positive_price() {
        let mut dashboard = dashboard(false);
        let json = dashboard.predictions_json(45.0).unwrap();
        let predictions: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(predictions.len(), 7);

        assert_eq!(
            dashboard.predictions_json(0.0),
            Err("Current price must be positive".to_string())
        );
        assert!(dashboard.predictions_json(-12.5).is_err());
        assert!(dashboard.predictions_json(f64::NAN).is_err());
    }

    #[test]
    fn test_insights_payload() {
        let json = dashboard(false).insights_json("Tea").unwrap();
        let insights: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(insights["predictions"].as_array().unwrap().len(), 7);
        assert!(insights["narrative"].as_str().unwrap().starts_with("Prices for Tea"));
    }

    #[test]
    fn test_listings_filter() {
        let mut dashboard = dashboard(false);
        let json = dashboard.listings_json(r#"{"crop":"Maize"}"#).unwrap();
        let listings: Value = serde_json::from_str(&json).unwrap();

        assert!(listings["listings"]
            .as_array()
            .unwrap()
            .iter()
            .all(|l| l["crop"] == "Maize"));
        assert!(dashboard.listings_json("{not json").is_err());
    }

    #[test]
    fn test_news_category() {
        let dashboard = dashboard(false);
        let json = dashboard.news_json(Some("climate")).unwrap();
        let news: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(news.len(), 1);
        assert!(dashboard.news_json(Some("sports")).is_err());
    }

    #[test]
    fn test_sign_in_requires_configured_identity() {
        assert!(dashboard(false).sign_in_json(USER_JSON).is_err());

        let mut dashboard = dashboard(true);
        let user_json = dashboard.sign_in_json(USER_JSON).unwrap();
        let user: Value = serde_json::from_str(&user_json).unwrap();
        assert_eq!(user["uid"], "u-1");
        assert!(dashboard.user().is_some());
    }

    #[test]
    fn test_contact_link_after_sign_in() {
        let mut dashboard = dashboard(true);
        let listings = dashboard.model.farmer_listings(1);
        let listing_json = serde_json::to_string(&listings[0]).unwrap();

        assert!(dashboard.contact_link_for(&listing_json).is_err());

        dashboard.sign_in_json(USER_JSON).unwrap();
        let link = dashboard.contact_link_for(&listing_json).unwrap();
        assert!(link.starts_with("https://wa.me/2547"));
    }

    #[test]
    fn test_format_kes() {
        assert_eq!(format_kes(1234.5), "KES 1,234.50");
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_kenyan_phone("0712345678"));
        assert!(!is_valid_kenyan_phone("12345"));
    }
}
