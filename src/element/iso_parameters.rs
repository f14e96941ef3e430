//! Monomial coefficients of an element map

use crate::element::polynomials::MONOMIAL_COUNT;
use crate::types::RealScalar;

/// Coefficients of the element map in the monomial basis, one array per physical axis
///
/// Entry `[axis][k]` multiplies monomial `k` of
/// [monomials](crate::element::polynomials::monomials) in component `axis` of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct IsoParameters<T: RealScalar> {
    axes: [[T; MONOMIAL_COUNT]; 3],
}

impl<T: RealScalar> IsoParameters<T> {
    /// Create from one coefficient array per axis
    pub fn new(axes: [[T; MONOMIAL_COUNT]; 3]) -> Self {
        Self { axes }
    }

    /// The coefficients of one axis
    pub fn axis(&self, axis: usize) -> &[T; MONOMIAL_COUNT] {
        &self.axes[axis]
    }
}
