//! # Frontier Ext File
//!
//! Price history sources for the Frontier library.
//!
//! This crate provides default implementations for EOD loads and tests:
//! - [`CsvPriceSource`]: long-format CSV (`date,asset,close`)
//! - [`InMemoryPriceSource`]: programmatic insertion
//!
//! For live market data, implement
//! [`PriceHistorySource`](frontier_traits::PriceHistorySource) against the
//! vendor API instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod market_data;

pub use market_data::*;
