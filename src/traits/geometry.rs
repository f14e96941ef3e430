//! Finalised element geometry.

use crate::element::iso_parameters::IsoParameters;
use crate::types::{GeometryType, PointLocation, RealScalar};

pub trait Geometry {
    //! A finalised element

    /// The floating point type used for coordinates
    type T: RealScalar;

    /// The id of the element
    fn id(&self) -> usize;

    /// The type of the geometry
    fn geometry_type(&self) -> GeometryType;
}

pub trait ReferenceMap: Geometry {
    //! Reference to physical map

    /// Component `axis` of the physical point at the collapsed reference coordinate `xi`
    ///
    /// Returns `None` if `axis` is not 0, 1 or 2.
    fn coordinate(&self, axis: usize, xi: &[Self::T; 3]) -> Option<Self::T>;

    /// The physical point at the collapsed reference coordinate `xi`
    fn physical_point(&self, xi: &[Self::T; 3]) -> [Self::T; 3];

    /// The Jacobian of the map with respect to the collapsed coordinates
    ///
    /// Entry `[i][j]` is the derivative of physical component `i` with respect to `xi[j]`.
    fn jacobian(&self, xi: &[Self::T; 3]) -> [[Self::T; 3]; 3];
}

pub trait PointLocator: ReferenceMap {
    //! Physical to reference map

    /// Locate a physical point in the element
    ///
    /// `tolerance` is a distance tolerance: it bounds the physical residual of the
    /// recovered coordinate and the slack allowed at the boundary of the reference domain.
    fn locate_point(&self, point: &[Self::T; 3], tolerance: Self::T) -> PointLocation<Self::T>;
}

pub trait IsoParametric: Geometry {
    //! Access to the monomial coefficients of the map

    /// The coefficients fitted when the element was finalised
    fn iso_parameters(&self) -> &IsoParameters<Self::T>;
}
