//! HTTP handlers for the Mavuno market feed

pub mod catalog;
pub mod health;
pub mod insights;
pub mod listings;
pub mod news;
pub mod prices;
pub mod session;
pub mod weather;

pub use catalog::*;
pub use health::*;
pub use insights::*;
pub use listings::*;
pub use news::*;
pub use prices::*;
pub use session::*;
pub use weather::*;

use crate::error::{AppError, AppResult};

/// Turn a shared validator result into a field-level 400
pub(crate) fn check_field(
    result: Result<(), &'static str>,
    field: &str,
    message_sw: &str,
) -> AppResult<()> {
    result.map_err(|message| AppError::validation(field, message, message_sw))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route".to_string())
}
