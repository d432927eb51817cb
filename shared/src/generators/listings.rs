//! Farmer marketplace listing generator

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::catalog::{COUNTIES, CROPS, FARMER_NAMES, LISTING_DESCRIPTION, PRICE_UNIT};
use crate::models::FarmerListing;

/// Listings shown on the marketplace page
pub const DEFAULT_LISTING_COUNT: usize = 20;

/// Produce becomes available at most this far in the future
const AVAILABILITY_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Generate `count` listings with ids `listing-1` through `listing-{count}`
pub fn generate_farmer_listings<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<FarmerListing> {
    (1..=count)
        .map(|n| FarmerListing {
            id: format!("listing-{}", n),
            farmer_name: FARMER_NAMES[rng.gen_range(0..FARMER_NAMES.len())].to_string(),
            county: COUNTIES[rng.gen_range(0..COUNTIES.len())].to_string(),
            crop: CROPS[rng.gen_range(0..CROPS.len())].to_string(),
            quantity: rng.gen_range(100..2100),
            unit: PRICE_UNIT.to_string(),
            price_per_unit: Decimal::from(rng.gen_range(30i64..180)),
            phone: synthetic_phone(&mut *rng),
            description: LISTING_DESCRIPTION.to_string(),
            available_from: now + Duration::milliseconds(rng.gen_range(0..AVAILABILITY_WINDOW_MS)),
            organic: rng.gen_bool(0.5),
        })
        .collect()
}

/// A Safaricom-style mobile number, `+2547XXXXXXXX`
fn synthetic_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("+254{}", rng.gen_range(700_000_000u32..799_999_999))
}
