//! # Frontier Core
//!
//! Core types and error handling for the Frontier mean-variance library.
//!
//! This crate provides the value objects every other Frontier crate speaks:
//!
//! - **Types**: [`AssetSet`], [`ReturnVector`], [`CovarianceMatrix`],
//!   [`RiskFreeRate`] and [`Target`]
//! - **Errors**: [`FrontierError`] with its [`FrontierErrorKind`] classification
//!
//! ## Example
//!
//! ```rust
//! use frontier_core::prelude::*;
//!
//! let assets = AssetSet::new(["spy", "agg"]).unwrap();
//! let returns = ReturnVector::new(vec![0.10, 0.20]).unwrap();
//! let cov = CovarianceMatrix::from_rows(&[vec![0.04, 0.0], vec![0.0, 0.09]]).unwrap();
//!
//! assert_eq!(assets.as_slice(), &["SPY".to_string(), "AGG".to_string()]);
//! assert_eq!(returns.len(), cov.size());
//! assert_eq!(Target::from_inputs(None, None).unwrap(), Target::NoTarget);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FrontierError, FrontierErrorKind, FrontierResult};
    pub use crate::types::{AssetSet, CovarianceMatrix, ReturnVector, RiskFreeRate, Target};
}

pub use error::{FrontierError, FrontierErrorKind, FrontierResult};
pub use types::{AssetSet, CovarianceMatrix, ReturnVector, RiskFreeRate, Target};
