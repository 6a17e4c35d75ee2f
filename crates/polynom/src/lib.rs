//! # polynom
//!
//! Dense univariate polynomials with value semantics.
//!
//! This crate provides:
//! - [`Polynomial`]: a dense coefficient vector with an explicit degree
//! - Element-wise addition/subtraction and scalar multiplication
//! - Evaluation via a generic integer power
//! - Explicit resizing with `shrink_to_fit` and `expand`
//! - Tolerance-based equality for floating-point coefficients
//!
//! ## Degree semantics
//!
//! The degree is the highest *allocated* exponent, not the highest non-zero
//! one. Trailing zero terms are kept until [`Polynomial::shrink_to_fit`] is
//! called, and element-wise arithmetic requires both operands to have the
//! same degree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::PolynomialError;
pub use traits::{Scalar, EPSILON};
