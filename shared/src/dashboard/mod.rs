//! View logic behind the dashboard pages
//!
//! Filtering, summarising and formatting applied to generated data before it
//! is rendered. Nothing here draws random numbers.

mod insights;
mod listings;
mod prices;
mod weather;

pub use insights::*;
pub use listings::*;
pub use prices::*;
pub use weather::*;

use rust_decimal::{Decimal, RoundingStrategy};

/// Case-insensitive substring match; an empty query matches everything
pub(crate) fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Format an amount in Kenyan shillings, e.g. `KES 1,234.50`
pub fn format_kes(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}KES {}.{}", sign, grouped, fraction)
}
