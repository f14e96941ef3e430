//! Forward, inverse and forward again

use crate::check::options::{positive, CheckOptions};
use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::geometry::common::distance;
use crate::traits::PointLocator;
use crate::types::{point_to_f64, to_f64, PointLocation, RealScalar};
use log::warn;
use std::fmt;

/// The outcome of one round trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyResult<T: RealScalar> {
    element_id: usize,
    sample: [T; 3],
    initial: [T; 3],
    recovered: [T; 3],
    location: PointLocation<T>,
    distance: T,
}

impl<T: RealScalar> ConsistencyResult<T> {
    /// Id of the element that was checked
    pub fn element_id(&self) -> usize {
        self.element_id
    }

    /// The reference sample the round trip started from
    pub fn sample(&self) -> &[T; 3] {
        &self.sample
    }

    /// The physical image of the sample
    pub fn initial(&self) -> &[T; 3] {
        &self.initial
    }

    /// The physical image of the recovered reference coordinate
    pub fn recovered(&self) -> &[T; 3] {
        &self.recovered
    }

    /// What point location reported for the initial point
    pub fn location(&self) -> &PointLocation<T> {
        &self.location
    }

    /// Was the initial point found inside the element?
    pub fn is_contained(&self) -> bool {
        self.location.is_inside()
    }

    /// Euclidean distance between the initial and recovered points
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Are all the values produced by the round trip finite?
    pub fn is_finite(&self) -> bool {
        self.initial
            .iter()
            .chain(self.recovered.iter())
            .chain(self.location.reference().iter())
            .all(|c| c.is_finite())
            && self.distance.is_finite()
    }

    /// Check the round trip against `options`
    ///
    /// A sample strictly inside the reference cell must be located inside the element and
    /// come back within the round trip tolerance. A sample on or beyond the boundary may
    /// be reported outside, but if it is reported inside the distance is still bounded.
    pub fn validate(&self, options: &CheckOptions<T>) -> Result<()> {
        if !self.is_finite() {
            return Err(Error::NumericAnomaly {
                element_id: self.element_id,
                sample: point_to_f64(&self.sample),
                reason: format!(
                    "round trip produced non-finite values: {:?} -> {:?}",
                    point_to_f64(&self.initial),
                    point_to_f64(&self.recovered)
                ),
            });
        }
        if !self.is_contained() {
            if reference_cell::is_interior(&self.sample) {
                return Err(Error::ConsistencyViolation {
                    element_id: self.element_id,
                    sample: point_to_f64(&self.sample),
                    reason: format!(
                        "interior point {:?} reported outside the element at distance {:e}",
                        point_to_f64(&self.initial),
                        to_f64(self.location.distance())
                    ),
                });
            }
            return Ok(());
        }
        if self.distance > options.round_trip_tolerance() {
            return Err(Error::ConsistencyViolation {
                element_id: self.element_id,
                sample: point_to_f64(&self.sample),
                reason: format!(
                    "round trip distance {:e} exceeds {:e}",
                    to_f64(self.distance),
                    to_f64(options.round_trip_tolerance())
                ),
            });
        }
        Ok(())
    }
}

impl<T: RealScalar> fmt::Display for ConsistencyResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "is_contained: {}", u8::from(self.is_contained()))?;
        writeln!(
            f,
            "0: {} {} {}",
            self.initial[0], self.initial[1], self.initial[2]
        )?;
        writeln!(
            f,
            "1: {} {} {}",
            self.recovered[0], self.recovered[1], self.recovered[2]
        )?;
        write!(f, "error: {:e}", self.distance)
    }
}

/// Map a reference sample to physical space, locate it, and map it back
///
/// `tolerance` is the distance tolerance handed to point location. When the point is
/// reported outside the element the recovered point is the image of the nearest reference
/// estimate, so the distance is still measured.
pub fn check_round_trip<G: PointLocator>(
    geometry: &G,
    sample: &[G::T; 3],
    tolerance: G::T,
) -> Result<ConsistencyResult<G::T>> {
    let tolerance = positive("inversion", tolerance)?;
    let initial = geometry.physical_point(sample);
    let location = geometry.locate_point(&initial, tolerance);
    let recovered = geometry.physical_point(&location.reference());
    let result = ConsistencyResult {
        element_id: geometry.id(),
        sample: *sample,
        initial,
        recovered,
        location,
        distance: distance(&initial, &recovered),
    };
    if !result.is_finite() {
        warn!(
            "Round trip in element {} at {:?} produced non-finite values",
            result.element_id,
            point_to_f64(sample)
        );
    }
    Ok(result)
}
