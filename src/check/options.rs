//! Tolerances used by the checks

use crate::error::{Error, Result};
use crate::types::{real, GeometryType, RealScalar};

/// Tolerances used by the checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOptions<T: RealScalar> {
    inversion_tolerance: T,
    round_trip_tolerance: T,
    discrepancy_tolerance: Option<T>,
}

impl<T: RealScalar> Default for CheckOptions<T> {
    fn default() -> Self {
        Self {
            inversion_tolerance: real(1e-12),
            round_trip_tolerance: real(1e-9),
            discrepancy_tolerance: Some(real(1e-9)),
        }
    }
}

impl<T: RealScalar> CheckOptions<T> {
    /// Default tolerances for a type of geometry
    ///
    /// Curved geometries get a looser round trip tolerance, and their cross-validation
    /// discrepancy is measured but not bounded, as the monomial coefficients only
    /// capture the straight-sided part of the map.
    pub fn for_geometry_type(geometry_type: GeometryType) -> Self {
        match geometry_type {
            GeometryType::Regular | GeometryType::Deformed => Self::default(),
            GeometryType::Curved => Self {
                round_trip_tolerance: real(1e-6),
                discrepancy_tolerance: None,
                ..Self::default()
            },
        }
    }

    /// Distance tolerance passed to point location
    pub fn inversion_tolerance(&self) -> T {
        self.inversion_tolerance
    }

    /// Set the distance tolerance passed to point location
    pub fn set_inversion_tolerance(&mut self, tolerance: T) -> Result<()> {
        self.inversion_tolerance = positive("inversion", tolerance)?;
        Ok(())
    }

    /// Largest accepted distance between a point and its round trip image
    pub fn round_trip_tolerance(&self) -> T {
        self.round_trip_tolerance
    }

    /// Set the largest accepted round trip distance
    pub fn set_round_trip_tolerance(&mut self, tolerance: T) -> Result<()> {
        self.round_trip_tolerance = positive("round trip", tolerance)?;
        Ok(())
    }

    /// Largest accepted cross-validation discrepancy, if it is bounded
    pub fn discrepancy_tolerance(&self) -> Option<T> {
        self.discrepancy_tolerance
    }

    /// Set the largest accepted cross-validation discrepancy; `None` only measures it
    pub fn set_discrepancy_tolerance(&mut self, tolerance: Option<T>) -> Result<()> {
        self.discrepancy_tolerance = match tolerance {
            Some(t) => Some(positive("discrepancy", t)?),
            None => None,
        };
        Ok(())
    }
}

/// Check that a tolerance is positive and finite
pub(crate) fn positive<T: RealScalar>(name: &str, tolerance: T) -> Result<T> {
    if tolerance.is_finite() && tolerance > T::zero() {
        Ok(tolerance)
    } else {
        Err(Error::Precondition(format!(
            "{name} tolerance must be positive and finite, got {tolerance}"
        )))
    }
}
