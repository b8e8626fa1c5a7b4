//! # Frontier Traits
//!
//! Trait definitions for the collaborators of the frontier engine.
//!
//! This crate contains only traits and the plain data they exchange.
//! Implementations live in separate crates (`frontier-stats`,
//! `frontier-ext-file`).
//!
//! ## Module Structure
//!
//! - [`ids`]: Asset identifiers
//! - [`market_data`]: Price history sources and statistics providers
//! - [`error`]: The shared [`TraitError`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod market_data;

// Re-export commonly used types
pub use error::TraitError;
pub use ids::AssetId;
pub use market_data::{
    BenchmarkStats, MarketStatistics, PriceHistory, PriceHistorySource, PricePoint,
    StatisticsProvider,
};
