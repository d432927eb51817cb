//! Marketplace page: listing filters and WhatsApp contact

use serde::{Deserialize, Serialize};

use super::{format_kes, matches_query};
use crate::error::SessionError;
use crate::models::FarmerListing;
use crate::session::Session;
use crate::validation::whatsapp_number;

/// Search box plus crop and county dropdowns; `None` means "all"
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingFilter {
    #[serde(default)]
    pub search: String,
    pub crop: Option<String>,
    pub county: Option<String>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &FarmerListing) -> bool {
        let matches_search = matches_query(&listing.crop, &self.search)
            || matches_query(&listing.county, &self.search)
            || matches_query(&listing.farmer_name, &self.search);
        let matches_crop = self.crop.as_deref().map_or(true, |crop| listing.crop == crop);
        let matches_county = self
            .county
            .as_deref()
            .map_or(true, |county| listing.county == county);

        matches_search && matches_crop && matches_county
    }

    pub fn apply<'a>(&self, listings: &'a [FarmerListing]) -> Vec<&'a FarmerListing> {
        listings.iter().filter(|listing| self.matches(listing)).collect()
    }
}

/// Distinct crops present in `listings`, sorted, for the crop dropdown
pub fn listing_crops(listings: &[FarmerListing]) -> Vec<String> {
    distinct_sorted(listings.iter().map(|listing| listing.crop.as_str()))
}

/// Distinct counties present in `listings`, sorted, for the county dropdown
pub fn listing_counties(listings: &[FarmerListing]) -> Vec<String> {
    distinct_sorted(listings.iter().map(|listing| listing.county.as_str()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<String> = values.map(str::to_string).collect();
    values.sort();
    values.dedup();
    values
}

/// Opening message a buyer sends to the farmer
pub fn contact_message(listing: &FarmerListing) -> String {
    format!(
        "Hello {}, I'm interested in your {} listing ({}{} at {}/{}). Is this still available?",
        listing.farmer_name,
        listing.crop,
        listing.quantity,
        listing.unit,
        format_kes(listing.price_per_unit),
        listing.unit
    )
}

/// `wa.me` click-to-chat link with a prefilled message
pub fn whatsapp_link(phone: &str, message: &str) -> String {
    let number = whatsapp_number(phone).unwrap_or_else(|| {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    });
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Contact link for a listing; buyers must be signed in
pub fn contact_link(session: &Session, listing: &FarmerListing) -> Result<String, SessionError> {
    session.require_user()?;
    Ok(whatsapp_link(&listing.phone, &contact_message(listing)))
}
