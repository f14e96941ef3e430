//! Differential geometric factors

use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::geometry::common::compute_det33;
use crate::geometry::map::PyramidMap;
use crate::types::{real, to_f64, GeometryType, RealScalar};
use itertools::iproduct;

/// Three-point Gauss-Legendre points on [-1, 1]
const GAUSS_POINTS: [f64; 3] = [-0.774_596_669_241_483_4, 0.0, 0.774_596_669_241_483_4];
/// Three-point Gauss-Legendre weights on [-1, 1]
const GAUSS_WEIGHTS: [f64; 3] = [5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0];

/// Geometric factors computed when a pyramid is finalised
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomFactors<T: RealScalar> {
    geometry_type: GeometryType,
    min_jacobian: T,
    max_jacobian: T,
    volume: T,
}

impl<T: RealScalar> GeomFactors<T> {
    /// Compute the factors of a pyramid map
    ///
    /// The determinant of the Jacobian with respect to Cartesian reference coordinates is
    /// sampled on a 3 by 3 by 3 Gauss grid of collapsed points. It must be positive.
    pub(crate) fn compute(id: usize, map: &PyramidMap<T>, scale: T) -> Result<Self> {
        let mut min_jacobian = T::infinity();
        let mut max_jacobian = T::neg_infinity();
        let mut volume = T::zero();
        let mut first = None;
        let mut affine = true;
        let tolerance = real::<T>(1e-12) * scale;

        for (i, j, k) in iproduct!(0..3, 0..3, 0..3) {
            let eta = [
                real::<T>(GAUSS_POINTS[i]),
                real::<T>(GAUSS_POINTS[j]),
                real::<T>(GAUSS_POINTS[k]),
            ];
            let weight = real::<T>(GAUSS_WEIGHTS[i] * GAUSS_WEIGHTS[j] * GAUSS_WEIGHTS[k]);

            let jacobian = map.cartesian_jacobian(&reference_cell::uncollapse(&eta));
            let det = compute_det33(&jacobian);
            if !det.is_finite() {
                return Err(Error::InvalidGeometry(format!(
                    "non-finite Jacobian determinant in element {id}"
                )));
            }
            min_jacobian = min_jacobian.min(det);
            max_jacobian = max_jacobian.max(det);
            volume = volume + weight * compute_det33(&map.jacobian(&eta));

            match first {
                None => first = Some(jacobian),
                Some(j0) => {
                    if jacobian
                        .iter()
                        .flatten()
                        .zip(j0.iter().flatten())
                        .any(|(a, b)| (*a - *b).abs() > tolerance)
                    {
                        affine = false;
                    }
                }
            }
        }

        if min_jacobian <= T::zero() {
            return Err(Error::InvalidGeometry(format!(
                "non-positive Jacobian determinant {:e} in element {id}",
                to_f64(min_jacobian)
            )));
        }

        let geometry_type = if map.is_curved() {
            GeometryType::Curved
        } else if affine {
            GeometryType::Regular
        } else {
            GeometryType::Deformed
        };

        Ok(Self {
            geometry_type,
            min_jacobian,
            max_jacobian,
            volume,
        })
    }

    /// The type of the geometry
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Smallest sampled Jacobian determinant
    pub fn min_jacobian(&self) -> T {
        self.min_jacobian
    }

    /// Largest sampled Jacobian determinant
    pub fn max_jacobian(&self) -> T {
        self.max_jacobian
    }

    /// Volume of the element
    pub fn volume(&self) -> T {
        self.volume
    }
}
