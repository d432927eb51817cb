//! Services backing the Mavuno market feed

pub mod market_feed;

pub use market_feed::MarketFeed;
