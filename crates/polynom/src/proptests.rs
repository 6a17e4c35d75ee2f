//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use crate::error::PolynomialError;
    use crate::traits::Scalar;

    // Strategy for a polynomial of exactly the given degree
    fn poly_of_degree(degree: usize) -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec(-100.0f64..100.0, degree + 1)
            .prop_map(move |v| Polynomial::from_coefficients(&v, degree))
    }

    // Strategy for a pair of polynomials sharing a degree
    fn poly_pair() -> impl Strategy<Value = (Polynomial<f64>, Polynomial<f64>)> {
        (0usize..6).prop_flat_map(|d| (poly_of_degree(d), poly_of_degree(d)))
    }

    // Strategy for a polynomial whose leading coefficient is non-zero,
    // so shrink_to_fit cannot drop the top term
    fn poly_nonzero_lead() -> impl Strategy<Value = Polynomial<f64>> {
        (0usize..6)
            .prop_flat_map(poly_of_degree)
            .prop_filter("leading coefficient must be non-zero", |p| {
                p.coefficient_at(p.degree()).unwrap() != 0.0
            })
    }

    proptest! {
        #[test]
        fn set_then_get_roundtrip(degree in 0usize..8, value in -1000.0f64..1000.0) {
            let mut p = Polynomial::<f64>::from_degree(degree);
            for i in 0..=degree {
                p.set(value, i).unwrap();
                prop_assert!(p.coefficient_at(i).unwrap().approx_eq(value));
            }
        }

        #[test]
        fn add_then_sub_restores((a, b) in poly_pair()) {
            // (a + b) - b = a
            let roundtrip = a.add(&b).unwrap().sub(&b).unwrap();
            prop_assert_eq!(roundtrip, a);
        }

        #[test]
        fn add_commutative((a, b) in poly_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn scale_then_unscale_restores(a in poly_of_degree(4), s in 0.5f64..50.0) {
            // (a * s) * (1/s) = a within tolerance
            prop_assert_eq!(a.scale(s).scale(1.0 / s), a);
        }

        #[test]
        fn eval_distributes_over_add((a, b) in poly_pair(), x in -2.0f64..2.0) {
            // Degrees and coefficient ranges are kept small enough that
            // rounding stays well inside the comparison tolerance.
            let sum = a.add(&b).unwrap();
            let direct = sum.evaluate(x);
            let split = a.evaluate(x) + b.evaluate(x);
            prop_assert!((direct - split).abs() <= 1e-7);
        }

        #[test]
        fn expand_then_shrink_identity(a in poly_nonzero_lead(), extra in 1usize..5) {
            let mut p = a.clone();
            p.expand(a.degree() + extra).unwrap();
            prop_assert_eq!(p.degree(), a.degree() + extra);
            p.shrink_to_fit();
            prop_assert_eq!(p, a);
        }

        #[test]
        fn shrink_all_zero_yields_degree_zero(degree in 0usize..16) {
            let mut p = Polynomial::<f64>::from_degree(degree);
            p.shrink_to_fit();
            prop_assert_eq!(p.degree(), 0);
            prop_assert_eq!(p.coefficient_at(0).unwrap(), 0.0);
        }

        #[test]
        fn index_past_degree_always_fails(degree in 0usize..16) {
            let p = Polynomial::<f64>::from_degree(degree);
            prop_assert_eq!(
                p.coefficient_at(degree + 1),
                Err(PolynomialError::OutOfRange { index: degree + 1, degree })
            );
        }

        #[test]
        fn mismatched_degrees_never_add(a_deg in 0usize..6, b_deg in 0usize..6) {
            prop_assume!(a_deg != b_deg);
            let a = Polynomial::<f64>::from_degree(a_deg);
            let b = Polynomial::<f64>::from_degree(b_deg);
            prop_assert_eq!(
                a.add(&b).unwrap_err(),
                PolynomialError::DegreeMismatch { left: a_deg, right: b_deg }
            );
        }
    }
}
