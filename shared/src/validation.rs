//! Validation utilities for the Mavuno dashboard
//!
//! Includes Kenya-specific checks for phone numbers and the market, crop and
//! county reference tables.

use rust_decimal::Decimal;

use crate::catalog::{is_county, is_crop, is_market};

// ============================================================================
// Reference Table Validations
// ============================================================================

/// Validate that a crop is tracked by the dashboard
pub fn validate_crop(crop: &str) -> Result<(), &'static str> {
    if is_crop(crop) {
        Ok(())
    } else {
        Err("Unknown crop")
    }
}

/// Validate that a market is covered by the price feed
pub fn validate_market(market: &str) -> Result<(), &'static str> {
    if is_market(market) {
        Ok(())
    } else {
        Err("Unknown market")
    }
}

/// Validate that a county is one of Kenya's 47 counties
pub fn validate_county(county: &str) -> Result<(), &'static str> {
    if is_county(county) {
        Ok(())
    } else {
        Err("Unknown county")
    }
}

// ============================================================================
// Analytics Input Validations
// ============================================================================

/// Validate a price history window against the configured maximum
pub fn validate_history_days(days: u32, max_days: u32) -> Result<(), &'static str> {
    if days > max_days {
        return Err("History window exceeds the maximum number of days");
    }
    Ok(())
}

/// Validate the price a forecast starts from
pub fn validate_current_price(price: Decimal) -> Result<(), &'static str> {
    if price <= Decimal::ZERO {
        return Err("Current price must be positive");
    }
    Ok(())
}

// ============================================================================
// Kenya-Specific Validations
// ============================================================================

/// Validate Kenyan mobile number format
/// Accepts: 0712345678, 0712 345 678, 712345678, 254712345678, +254712345678
pub fn validate_kenyan_phone(phone: &str) -> Result<(), &'static str> {
    match whatsapp_number(phone) {
        Some(_) => Ok(()),
        None => Err("Invalid Kenyan phone number format"),
    }
}

/// Normalize a Kenyan mobile number to the international digits `2547XXXXXXXX`
/// used by WhatsApp links
pub fn whatsapp_number(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let subscriber = match digits.len() {
        // Local format with trunk prefix (e.g., 0712345678)
        10 if digits.starts_with('0') => &digits[1..],
        // Without trunk prefix (e.g., 712345678)
        9 => digits.as_str(),
        // International with country code (e.g., 254712345678)
        12 if digits.starts_with("254") => &digits[3..],
        _ => return None,
    };

    // Mobile numbers start with 7 or 1 after the country code
    if subscriber.starts_with('7') || subscriber.starts_with('1') {
        Some(format!("254{}", subscriber))
    } else {
        None
    }
}
