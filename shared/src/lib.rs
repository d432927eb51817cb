//! Shared types and market model for the Mavuno agricultural dashboard
//!
//! This crate contains the synthetic Kenyan market data model and the view
//! logic shared between the backend feed, the browser (via WASM), and tests.

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod generators;
pub mod models;
pub mod preferences;
pub mod session;
pub mod types;
pub mod validation;

pub use catalog::{COUNTIES, CROPS, MARKETS};
pub use dashboard::*;
pub use error::*;
pub use generators::*;
pub use models::*;
pub use preferences::*;
pub use session::*;
pub use types::*;
pub use validation::*;
