//! Reduced monomial basis on the collapsed cube

use crate::types::RealScalar;

/// The number of monomials in the basis
pub const MONOMIAL_COUNT: usize = 8;

/// Evaluate the monomial basis at a reference coordinate
///
/// The basis is ordered `[1, x0, x1, x2, x0*x1, x1*x2, x0*x2, x0*x1*x2]`. The order is
/// shared with [IsoParameters](crate::element::iso_parameters::IsoParameters), so it must
/// not change. Non-finite input yields non-finite output.
pub fn monomials<T: RealScalar>(xi: &[T; 3]) -> [T; MONOMIAL_COUNT] {
    let [x0, x1, x2] = *xi;
    [
        T::one(),
        x0,
        x1,
        x2,
        x0 * x1,
        x1 * x2,
        x0 * x2,
        x0 * x1 * x2,
    ]
}

/// Dot product of the monomial basis at `xi` with one axis of coefficients
pub fn dot<T: RealScalar>(basis: &[T; MONOMIAL_COUNT], coefficients: &[T; MONOMIAL_COUNT]) -> T {
    basis
        .iter()
        .zip(coefficients.iter())
        .fold(T::zero(), |acc, (b, c)| acc + *b * *c)
}
