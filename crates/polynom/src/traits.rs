//! The coefficient trait.
//!
//! This module defines the seam between [`crate::Polynomial`] and its
//! coefficient type: the numeric operations polynomials need, plus the
//! tolerance-based comparison used by polynomial equality.

use std::fmt::{Debug, Display};
use std::ops::Sub;

use num_traits::{One, Zero};

/// Fixed absolute tolerance for approximate coefficient equality.
pub const EPSILON: f64 = 1e-7;

/// A polynomial coefficient.
///
/// Implemented for all primitive float and integer types. Float types
/// compare within [`EPSILON`]; integer types compare exactly, since their
/// subtraction is exact and the tolerance admits nothing but equality.
pub trait Scalar:
    Copy + PartialEq + Debug + Display + Zero + One + Sub<Output = Self>
{
    /// Returns true if `self` and `other` differ by at most [`EPSILON`].
    #[must_use]
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() <= EPSILON as $t
            }
        })*
    };
}

macro_rules! impl_scalar_exact {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }
        })*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
