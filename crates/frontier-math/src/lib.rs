//! # Frontier Math
//!
//! Mathematical utilities for the Frontier mean-variance library.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: matrix conversion, symmetry checks, inversion of
//!   symmetric positive definite matrices, quadratic forms
//! - **Sampling**: evenly spaced grids for curve generation
//!
//! ## Design Philosophy
//!
//! - **Closed form**: no iterative solvers; every routine is a fixed amount
//!   of linear algebra
//! - **Numerical Stability**: singular and indefinite inputs are reported,
//!   never silently regularized

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod linear_algebra;
pub mod sampling;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{
        check_symmetric, invert_positive_definite, mat_vec, matrix_from_rows, matrix_to_rows,
        quadratic_form,
    };
    pub use crate::sampling::linspace;
}

pub use error::{MathError, MathResult};
