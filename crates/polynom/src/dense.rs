//! Dense univariate polynomials with an explicit degree.
//!
//! Coefficients are stored in ascending exponent order: index `i` holds the
//! coefficient of `x^i`. The degree marks the highest allocated slot, which
//! is not necessarily the highest non-zero term; only
//! [`Polynomial::shrink_to_fit`] drops trailing zeros.

use num_traits::pow;

use crate::error::PolynomialError;
use crate::traits::Scalar;

/// A dense univariate polynomial over a numeric coefficient type.
///
/// Each instance exclusively owns its coefficient storage; cloning performs
/// a deep copy. Equality is tolerance-based: two polynomials are equal when
/// their degrees match and every coefficient pair differs by at most
/// [`crate::EPSILON`].
#[derive(Clone, Debug)]
pub struct Polynomial<T: Scalar> {
    /// Coefficients in ascending exponent order; never empty.
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Creates the zero polynomial of the given degree.
    #[must_use]
    pub fn from_degree(degree: usize) -> Self {
        Self {
            coeffs: vec![T::zero(); degree + 1],
        }
    }

    /// Creates a polynomial of the given degree from the first
    /// `degree + 1` values; any further values are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds fewer than `degree + 1` elements.
    #[must_use]
    pub fn from_coefficients(values: &[T], degree: usize) -> Self {
        Self {
            coeffs: values[..=degree].to_vec(),
        }
    }

    /// Returns the degree: the highest exponent with an allocated slot.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns all coefficients in ascending exponent order.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::OutOfRange`] when `index` exceeds the
    /// degree.
    pub fn coefficient_at(&self, index: usize) -> Result<T, PolynomialError> {
        self.coeffs
            .get(index)
            .copied()
            .ok_or(PolynomialError::OutOfRange {
                index,
                degree: self.degree(),
            })
    }

    /// Overwrites the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::OutOfRange`] when `index` exceeds the
    /// degree.
    pub fn set(&mut self, value: T, index: usize) -> Result<(), PolynomialError> {
        let degree = self.degree();
        match self.coeffs.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PolynomialError::OutOfRange { index, degree }),
        }
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms accumulate from the constant term upward, each computed as
    /// `coeffs[i] * x^i` with a generic integer power (`x^0` is one, so
    /// `x = 0` needs no special case).
    #[must_use]
    pub fn evaluate(&self, x: T) -> T {
        let mut result = T::zero();
        for (i, &c) in self.coeffs.iter().enumerate() {
            result = result + c * pow(x, i);
        }
        result
    }

    /// Drops trailing zero terms, reallocating storage to end at the
    /// highest non-zero exponent.
    ///
    /// An all-zero polynomial shrinks to degree 0 with a single zero
    /// coefficient.
    pub fn shrink_to_fit(&mut self) {
        let last = self
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0);
        self.coeffs.truncate(last + 1);
        self.coeffs.shrink_to_fit();
    }

    /// Grows the polynomial to `new_degree`, preserving existing
    /// coefficients and zero-filling the new high-order slots.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidExpansion`] unless `new_degree`
    /// exceeds the current degree.
    pub fn expand(&mut self, new_degree: usize) -> Result<(), PolynomialError> {
        if new_degree <= self.degree() {
            return Err(PolynomialError::InvalidExpansion {
                requested: new_degree,
                current: self.degree(),
            });
        }
        self.coeffs.resize(new_degree + 1, T::zero());
        Ok(())
    }

    /// Adds `other` element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DegreeMismatch`] when the degrees differ;
    /// `self` is left unchanged.
    pub fn add_assign(&mut self, other: &Self) -> Result<(), PolynomialError> {
        self.check_same_degree(other)?;
        for (a, &b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Subtracts `other` element-wise, in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DegreeMismatch`] when the degrees differ;
    /// `self` is left unchanged.
    pub fn sub_assign(&mut self, other: &Self) -> Result<(), PolynomialError> {
        self.check_same_degree(other)?;
        for (a, &b) in self.coeffs.iter_mut().zip(&other.coeffs) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Multiplies every coefficient by `scalar`, in place.
    pub fn scale_assign(&mut self, scalar: T) {
        for c in &mut self.coeffs {
            *c = *c * scalar;
        }
    }

    /// Returns `self + other`, leaving both operands unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DegreeMismatch`] when the degrees differ.
    pub fn add(&self, other: &Self) -> Result<Self, PolynomialError> {
        let mut result = self.clone();
        result.add_assign(other)?;
        Ok(result)
    }

    /// Returns `self - other`, leaving both operands unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DegreeMismatch`] when the degrees differ.
    pub fn sub(&self, other: &Self) -> Result<Self, PolynomialError> {
        let mut result = self.clone();
        result.sub_assign(other)?;
        Ok(result)
    }

    /// Returns `self * scalar`, leaving `self` unmodified.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = self.clone();
        result.scale_assign(scalar);
        result
    }

    fn check_same_degree(&self, other: &Self) -> Result<(), PolynomialError> {
        if self.degree() == other.degree() {
            Ok(())
        } else {
            Err(PolynomialError::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            })
        }
    }
}

impl<T: Scalar> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.degree() == other.degree()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(&a, &b)| a.approx_eq(b))
    }
}

impl<T: Scalar> std::ops::Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self::Output {
        self.scale_assign(scalar);
        self
    }
}

impl<T: Scalar> std::ops::Mul<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_assign(scalar);
    }
}

// Coherence forbids a blanket `impl Mul<Polynomial<T>> for T`, so the
// scalar-on-the-left form is provided per primitive type.
macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {
        $(impl std::ops::Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, poly: Polynomial<$t>) -> Self::Output {
                poly * self
            }
        })*
    };
}

impl_left_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Scalar> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .map(|(i, c)| format!("({c})x^{i}"))
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
