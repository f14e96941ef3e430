//! Types specific to pyrmap

use std::fmt::{Debug, Display, LowerExp};

/// Floating point type used for coordinates
pub trait RealScalar: num::Float + Debug + Display + LowerExp + Send + Sync + 'static {}

impl<T: num::Float + Debug + Display + LowerExp + Send + Sync + 'static> RealScalar for T {}

/// Convert an `f64` constant into `T`
#[inline]
pub(crate) fn real<T: RealScalar>(value: f64) -> T {
    T::from(value).unwrap()
}

/// Convert a value into `f64` for reporting
#[inline]
pub(crate) fn to_f64<T: RealScalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Convert a point into `f64` for reporting
pub(crate) fn point_to_f64<T: RealScalar>(point: &[T; 3]) -> [f64; 3] {
    [to_f64(point[0]), to_f64(point[1]), to_f64(point[2])]
}

/// The type of a reference cell
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ReferenceCellType {
    /// A triangle
    Triangle,
    /// A quadrilateral
    Quadrilateral,
}

/// The type of a finalised geometry
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GeometryType {
    /// Straight-sided with a constant Cartesian Jacobian
    Regular,
    /// Straight-sided with a varying Jacobian, e.g. a non-planar base
    Deformed,
    /// At least one edge is curved
    Curved,
}

impl GeometryType {
    /// Is the geometry straight-sided?
    pub fn is_straight(&self) -> bool {
        !matches!(self, GeometryType::Curved)
    }
}

/// The outcome of locating a physical point in an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointLocation<T: RealScalar> {
    /// The point lies in the element at the given reference coordinate
    Inside {
        /// Collapsed reference coordinate of the point
        reference: [T; 3],
    },
    /// The point lies outside the element
    Outside {
        /// Physical distance from the point to the image of `nearest_reference`
        distance: T,
        /// Estimate of the nearest reference coordinate, clamped into the reference domain
        nearest_reference: [T; 3],
    },
}

impl<T: RealScalar> PointLocation<T> {
    /// Was the point found inside the element?
    pub fn is_inside(&self) -> bool {
        matches!(self, PointLocation::Inside { .. })
    }

    /// The recovered reference coordinate
    ///
    /// For a point outside the element this is the nearest reference estimate.
    pub fn reference(&self) -> [T; 3] {
        match self {
            PointLocation::Inside { reference } => *reference,
            PointLocation::Outside {
                nearest_reference, ..
            } => *nearest_reference,
        }
    }

    /// Distance to the element, zero for a point inside it
    pub fn distance(&self) -> T {
        match self {
            PointLocation::Inside { .. } => T::zero(),
            PointLocation::Outside { distance, .. } => *distance,
        }
    }
}
