//! Consistency report for one element

use crate::check::cross_validation::{cross_validate, CrossValidation};
use crate::check::options::CheckOptions;
use crate::check::round_trip::{check_round_trip, ConsistencyResult};
use crate::error::{Error, Result};
use crate::traits::{IsoParametric, PointLocator};
use crate::types::{to_f64, GeometryType, RealScalar};
use log::{debug, info, warn};
use std::fmt;

/// Round trip and cross-validation records of one element over a set of samples
///
/// Records are keyed by element id and sample index.
#[derive(Debug)]
pub struct ConsistencyReport<T: RealScalar> {
    element_id: usize,
    geometry_type: GeometryType,
    round_trips: Vec<ConsistencyResult<T>>,
    cross_validations: Vec<CrossValidation<T>>,
    failures: Vec<(usize, Error)>,
}

impl<T: RealScalar> ConsistencyReport<T> {
    /// Run both checks at every sample
    ///
    /// Violations are collected in the report rather than returned; the error path is only
    /// taken when the options cannot be used.
    pub fn run<G: PointLocator<T = T> + IsoParametric>(
        geometry: &G,
        samples: &[[T; 3]],
        options: &CheckOptions<T>,
    ) -> Result<Self> {
        let element_id = geometry.id();
        let mut round_trips = Vec::with_capacity(samples.len());
        let mut cross_validations = Vec::with_capacity(samples.len());
        let mut failures = vec![];

        for (index, sample) in samples.iter().enumerate() {
            let round_trip = check_round_trip(geometry, sample, options.inversion_tolerance())?;
            debug!(
                "Element {element_id} sample {index}: round trip distance {:e}",
                to_f64(round_trip.distance())
            );
            if let Err(e) = round_trip.validate(options) {
                warn!("{e}");
                failures.push((index, e));
            }

            let cross_validation = cross_validate(geometry, sample);
            debug!(
                "Element {element_id} sample {index}: discrepancy {:e}",
                to_f64(cross_validation.discrepancy())
            );
            if let Err(e) = cross_validation.validate(options) {
                warn!("{e}");
                failures.push((index, e));
            }

            round_trips.push(round_trip);
            cross_validations.push(cross_validation);
        }

        let report = Self {
            element_id,
            geometry_type: geometry.geometry_type(),
            round_trips,
            cross_validations,
            failures,
        };
        info!(
            "Element {element_id}: {} samples, {} violations, max round trip distance {:e}, max discrepancy {:e}",
            report.len(),
            report.failures.len(),
            to_f64(report.max_round_trip_distance()),
            to_f64(report.max_discrepancy())
        );
        Ok(report)
    }

    /// Id of the element
    pub fn element_id(&self) -> usize {
        self.element_id
    }

    /// Type of the element's geometry
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.round_trips.len()
    }

    /// Were no samples checked?
    pub fn is_empty(&self) -> bool {
        self.round_trips.is_empty()
    }

    /// The records of a sample
    pub fn record(&self, index: usize) -> Option<(&ConsistencyResult<T>, &CrossValidation<T>)> {
        Some((self.round_trips.get(index)?, self.cross_validations.get(index)?))
    }

    /// All round trip records, in sample order
    pub fn round_trips(&self) -> &[ConsistencyResult<T>] {
        &self.round_trips
    }

    /// All cross-validation records, in sample order
    pub fn cross_validations(&self) -> &[CrossValidation<T>] {
        &self.cross_validations
    }

    /// Violations found, with the index of the sample they were found at
    pub fn failures(&self) -> &[(usize, Error)] {
        &self.failures
    }

    /// Were no violations found?
    pub fn is_consistent(&self) -> bool {
        self.failures.is_empty()
    }

    /// Largest round trip distance, NaN if any distance is NaN
    pub fn max_round_trip_distance(&self) -> T {
        max_of(self.round_trips.iter().map(|r| r.distance()))
    }

    /// Largest cross-validation discrepancy, NaN if any discrepancy is NaN
    pub fn max_discrepancy(&self) -> T {
        max_of(self.cross_validations.iter().map(|c| c.discrepancy()))
    }

    /// The report if it is consistent, otherwise the first violation
    pub fn into_result(self) -> Result<Self> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            let mut failures = self.failures;
            Err(failures.swap_remove(0).1)
        }
    }
}

fn max_of<T: RealScalar>(values: impl Iterator<Item = T>) -> T {
    values.fold(T::zero(), |acc, v| {
        if v.is_nan() || acc.is_nan() {
            T::nan()
        } else {
            acc.max(v)
        }
    })
}

impl<T: RealScalar> fmt::Display for ConsistencyReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Element {} ({:?}), {} samples",
            self.element_id,
            self.geometry_type,
            self.len()
        )?;
        for (index, (round_trip, cross_validation)) in self
            .round_trips
            .iter()
            .zip(&self.cross_validations)
            .enumerate()
        {
            let s = round_trip.sample();
            writeln!(f, "\nSample {index}: {} {} {}", s[0], s[1], s[2])?;
            writeln!(f, "{round_trip}")?;
            writeln!(f, "{cross_validation}")?;
        }
        for (index, e) in &self.failures {
            writeln!(f, "\nViolation at sample {index}: {e}")?;
        }
        write!(
            f,
            "\nmax error: {:e}\nmax discrepancy: {:e}",
            self.max_round_trip_distance(),
            self.max_discrepancy()
        )
    }
}
