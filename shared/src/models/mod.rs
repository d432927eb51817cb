//! Domain models for the Mavuno market dashboard

mod listing;
mod news;
mod price;
mod recommendation;
mod weather;

pub use listing::*;
pub use news::*;
pub use price::*;
pub use recommendation::*;
pub use weather::*;
