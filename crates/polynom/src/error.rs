//! Errors raised by fallible polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Every fallible operation validates before mutating, so a returned error
/// always leaves the polynomial in its prior state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// An indexed read or write past the current degree.
    #[error("coefficient index {index} out of range for degree {degree}")]
    OutOfRange {
        /// The requested exponent.
        index: usize,
        /// The polynomial's current degree.
        degree: usize,
    },

    /// An expansion to a degree that does not exceed the current one.
    #[error("new degree {requested} must be greater than current degree {current}")]
    InvalidExpansion {
        /// The requested new degree.
        requested: usize,
        /// The polynomial's current degree.
        current: usize,
    },

    /// Element-wise arithmetic between polynomials of different degrees.
    #[error("degree mismatch: {left} vs {right}")]
    DegreeMismatch {
        /// Degree of the left operand.
        left: usize,
        /// Degree of the right operand.
        right: usize,
    },
}
