//! Reference tables for Kenyan agricultural markets
//!
//! Every generator draws from these fixed, ordered lists. Order matters:
//! snapshots are emitted market-major, crop-minor in table order, and weather
//! records follow the county order.

/// Wholesale markets covered by the price feed
pub const MARKETS: [&str; 6] = ["Nairobi", "Kisumu", "Mombasa", "Eldoret", "Nakuru", "Meru"];

/// The 47 counties of Kenya
pub const COUNTIES: [&str; 47] = [
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo-Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Murang'a",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyandarua",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita-Taveta",
    "Tana River",
    "Tharaka-Nithi",
    "Trans-Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
];

/// Crops tracked by the dashboard
pub const CROPS: [&str; 18] = [
    "Maize",
    "Beans",
    "Potatoes",
    "Tomatoes",
    "Onions",
    "Cabbage",
    "Sukuma Wiki",
    "Carrots",
    "Bananas",
    "Coffee",
    "Tea",
    "Avocado",
    "Mango",
    "Wheat",
    "Rice",
    "Sorghum",
    "Millet",
    "Cassava",
];

/// Unit every price and quantity is quoted in
pub const PRICE_UNIT: &str = "kg";

/// Base price used for crops missing from the price table (KES/kg)
pub const FALLBACK_BASE_PRICE: f64 = 50.0;

/// Market whose price is treated as the national reference
pub const REFERENCE_MARKET: &str = "Nairobi";

/// Base wholesale prices in KES per kg
const BASE_PRICES: [(&str, f64); 18] = [
    ("Maize", 45.0),
    ("Beans", 120.0),
    ("Potatoes", 55.0),
    ("Tomatoes", 70.0),
    ("Onions", 65.0),
    ("Cabbage", 35.0),
    ("Sukuma Wiki", 25.0),
    ("Carrots", 60.0),
    ("Bananas", 50.0),
    ("Coffee", 450.0),
    ("Tea", 380.0),
    ("Avocado", 80.0),
    ("Mango", 45.0),
    ("Wheat", 55.0),
    ("Rice", 130.0),
    ("Sorghum", 50.0),
    ("Millet", 48.0),
    ("Cassava", 40.0),
];

/// Base price for a crop, falling back to [`FALLBACK_BASE_PRICE`]
pub fn base_price(crop: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, price)| *price)
        .unwrap_or(FALLBACK_BASE_PRICE)
}

/// Starting prices of the price history chart in KES per kg
///
/// The chart only knows the staple vegetables and grains; every other crop
/// starts its walk from [`FALLBACK_BASE_PRICE`].
const HISTORY_BASE_PRICES: [(&str, f64); 6] = [
    ("Maize", 45.0),
    ("Beans", 120.0),
    ("Potatoes", 55.0),
    ("Tomatoes", 70.0),
    ("Onions", 65.0),
    ("Cabbage", 35.0),
];

/// Starting price of a crop's history walk, falling back to [`FALLBACK_BASE_PRICE`]
pub fn history_base_price(crop: &str) -> f64 {
    HISTORY_BASE_PRICES
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, price)| *price)
        .unwrap_or(FALLBACK_BASE_PRICE)
}

/// Price multiplier reflecting a market's demand and transport costs
pub fn market_multiplier(market: &str) -> f64 {
    match market {
        "Nairobi" => 1.15,
        "Mombasa" => 1.10,
        "Kisumu" => 0.95,
        _ => 1.0,
    }
}

pub fn is_market(name: &str) -> bool {
    MARKETS.contains(&name)
}

pub fn is_crop(name: &str) -> bool {
    CROPS.contains(&name)
}

pub fn is_county(name: &str) -> bool {
    COUNTIES.contains(&name)
}

/// Farmers appearing in synthetic marketplace listings
pub const FARMER_NAMES: [&str; 15] = [
    "John Kamau",
    "Mary Wanjiku",
    "Peter Omondi",
    "Grace Achieng",
    "David Kipchoge",
    "Sarah Njeri",
    "James Mutua",
    "Ann Chebet",
    "Samuel Otieno",
    "Jane Wambui",
    "Joseph Kiprotich",
    "Lucy Nyambura",
    "Daniel Mwangi",
    "Faith Chepkoech",
    "Robert Odhiambo",
];

pub const LISTING_DESCRIPTION: &str = "High quality produce, freshly harvested. Available for immediate delivery to Nairobi and surrounding areas.";

pub const RAIN_FORECAST: &str = "Rain expected in next 48 hours";
pub const CLEAR_FORECAST: &str = "Clear skies for next 3 days";

/// Farming advisories attached to weather records
pub const FARMING_ADVISORIES: [&str; 5] = [
    "Ideal conditions for planting maize. Ensure adequate irrigation.",
    "Good weather for harvesting. Dry crops thoroughly before storage.",
    "Heavy rains expected. Prepare drainage systems and delay planting.",
    "Perfect weather for tea picking. Maintain optimal moisture levels.",
    "Drought conditions. Implement water conservation measures.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_tables_have_no_duplicates() {
        assert_eq!(MARKETS.iter().collect::<HashSet<_>>().len(), MARKETS.len());
        assert_eq!(COUNTIES.iter().collect::<HashSet<_>>().len(), COUNTIES.len());
        assert_eq!(CROPS.iter().collect::<HashSet<_>>().len(), CROPS.len());
    }

    #[test]
    fn test_every_crop_has_a_base_price() {
        for crop in CROPS {
            assert!(BASE_PRICES.iter().any(|(name, _)| *name == crop), "{crop}");
        }
        assert_eq!(base_price("Coffee"), 450.0);
        assert_eq!(base_price("Quinoa"), FALLBACK_BASE_PRICE);
    }

    #[test]
    fn test_history_base_prices_cover_staples_only() {
        assert_eq!(history_base_price("Maize"), 45.0);
        assert_eq!(history_base_price("Cabbage"), 35.0);
        assert_eq!(history_base_price("Coffee"), FALLBACK_BASE_PRICE);
        assert_eq!(history_base_price("Sukuma Wiki"), FALLBACK_BASE_PRICE);
        for (crop, price) in HISTORY_BASE_PRICES {
            assert_eq!(base_price(crop), price);
        }
    }

    #[test]
    fn test_market_multipliers() {
        assert_eq!(market_multiplier("Nairobi"), 1.15);
        assert_eq!(market_multiplier("Mombasa"), 1.10);
        assert_eq!(market_multiplier("Kisumu"), 0.95);
        assert_eq!(market_multiplier("Eldoret"), 1.0);
        assert_eq!(market_multiplier("Kampala"), 1.0);
    }

    #[test]
    fn test_counties_are_sorted() {
        let mut sorted = COUNTIES;
        sorted.sort_unstable();
        assert_eq!(sorted, COUNTIES);
    }
}
