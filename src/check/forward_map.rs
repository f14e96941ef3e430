//! Forward map evaluated from monomial coefficients
//!
//! This deliberately does not call the element's own map: it is the reference the
//! element map is compared against.

use crate::element::iso_parameters::IsoParameters;
use crate::element::polynomials::{dot, monomials, MONOMIAL_COUNT};
use crate::error::{Error, Result};
use crate::types::RealScalar;

/// The physical point at the reference coordinate `xi`
///
/// Each component is the dot product of the monomial basis at `xi` with the coefficients
/// of that axis. Nothing is clamped: non-finite input gives non-finite output.
pub fn evaluate<T: RealScalar>(xi: &[T; 3], coefficients: &IsoParameters<T>) -> [T; 3] {
    let basis = monomials(xi);
    [
        dot(&basis, coefficients.axis(0)),
        dot(&basis, coefficients.axis(1)),
        dot(&basis, coefficients.axis(2)),
    ]
}

/// One component of the physical point at `xi`, from a slice of coefficients
///
/// The slice must hold exactly [MONOMIAL_COUNT] coefficients.
pub fn evaluate_axis<T: RealScalar>(xi: &[T; 3], coefficients: &[T]) -> Result<T> {
    let coefficients: &[T; MONOMIAL_COUNT] = coefficients.try_into().map_err(|_| {
        Error::Precondition(format!(
            "{} coefficients supplied, expected {MONOMIAL_COUNT}",
            coefficients.len()
        ))
    })?;
    Ok(dot(&monomials(xi), coefficients))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::element::reference_cell;
    use crate::shapes::linear_pyramid;
    use crate::traits::IsoParametric;
    use approx::*;
    use paste::paste;

    macro_rules! test_corner {
        ($($corner:literal),+) => {
        $(
            paste! {
                #[test]
                fn [<test_linear_pyramid_corner_ $corner>]() {
                    let geometry = linear_pyramid::<f64>().unwrap();
                    let corner = reference_cell::corners::<f64>()[$corner];
                    let expected = geometry.corner_points()[$corner];
                    let x = evaluate(&corner, geometry.iso_parameters());
                    for (a, b) in x.iter().zip(&expected) {
                        assert_relative_eq!(*a, *b, epsilon = 1e-9);
                    }
                }
            }
        )*
        };
    }

    test_corner!(0, 1, 2, 3, 4, 5, 6, 7);

    #[test]
    fn test_evaluate_matches_polynomial() {
        let mut axes = [[0.0; 8]; 3];
        axes[0] = [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        axes[1] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0];
        axes[2] = [0.0, 0.0, -1.0, 3.0, 0.0, 0.5, 0.0, 0.0];
        let coefficients = IsoParameters::new(axes);
        let [a, b, c] = [0.5, -0.25, 0.125];
        let x = evaluate(&[a, b, c], &coefficients);
        assert_relative_eq!(x[0], 1.0 + 2.0 * a);
        assert_relative_eq!(x[1], 4.0 * a * b * c);
        assert_relative_eq!(x[2], -b + 3.0 * c + 0.5 * b * c);
    }

    #[test]
    fn test_evaluate_axis() {
        let coefficients = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let value = evaluate_axis(&[1.0, 1.0, 1.0], &coefficients).unwrap();
        assert_relative_eq!(value, 8.0);
        assert!(matches!(
            evaluate_axis(&[1.0, 1.0, 1.0], &coefficients[..5]),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn test_non_finite_propagates() {
        let geometry = linear_pyramid::<f64>().unwrap();
        let x = evaluate(&[f64::NAN, 0.0, 0.0], geometry.iso_parameters());
        assert!(x.iter().any(|c| c.is_nan()));
    }
}
