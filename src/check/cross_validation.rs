//! Comparison of the element map with the monomial forward map

use crate::check::forward_map;
use crate::check::options::CheckOptions;
use crate::error::{Error, Result};
use crate::geometry::common::distance;
use crate::traits::{IsoParametric, ReferenceMap};
use crate::types::{point_to_f64, to_f64, RealScalar};
use std::fmt;

/// The element map and the monomial forward map at one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossValidation<T: RealScalar> {
    element_id: usize,
    sample: [T; 3],
    library: [T; 3],
    evaluator: [T; 3],
    discrepancy: T,
}

impl<T: RealScalar> CrossValidation<T> {
    /// Id of the element
    pub fn element_id(&self) -> usize {
        self.element_id
    }

    /// The reference sample
    pub fn sample(&self) -> &[T; 3] {
        &self.sample
    }

    /// The point computed by the element's own map
    pub fn library(&self) -> &[T; 3] {
        &self.library
    }

    /// The point computed from the monomial coefficients
    pub fn evaluator(&self) -> &[T; 3] {
        &self.evaluator
    }

    /// Euclidean distance between the two points
    pub fn discrepancy(&self) -> T {
        self.discrepancy
    }

    /// Are both points finite?
    pub fn is_finite(&self) -> bool {
        self.library
            .iter()
            .chain(self.evaluator.iter())
            .all(|c| c.is_finite())
    }

    /// Check the discrepancy against `options`
    ///
    /// When the options carry no discrepancy tolerance only non-finite values are rejected.
    pub fn validate(&self, options: &CheckOptions<T>) -> Result<()> {
        if !self.is_finite() {
            return Err(Error::NumericAnomaly {
                element_id: self.element_id,
                sample: point_to_f64(&self.sample),
                reason: format!(
                    "forward maps produced non-finite values: {:?} and {:?}",
                    point_to_f64(&self.library),
                    point_to_f64(&self.evaluator)
                ),
            });
        }
        match options.discrepancy_tolerance() {
            Some(tolerance) if self.discrepancy > tolerance => {
                Err(Error::ConsistencyViolation {
                    element_id: self.element_id,
                    sample: point_to_f64(&self.sample),
                    reason: format!(
                        "forward maps differ by {:e}, more than {:e}: {:?} and {:?}",
                        to_f64(self.discrepancy),
                        to_f64(tolerance),
                        point_to_f64(&self.library),
                        point_to_f64(&self.evaluator)
                    ),
                })
            }
            _ => Ok(()),
        }
    }
}

impl<T: RealScalar> fmt::Display for CrossValidation<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "library: {} {} {}",
            self.library[0], self.library[1], self.library[2]
        )?;
        writeln!(
            f,
            "evaluator: {} {} {}",
            self.evaluator[0], self.evaluator[1], self.evaluator[2]
        )?;
        write!(f, "discrepancy: {:e}", self.discrepancy)
    }
}

/// Evaluate both forward maps at `sample` and measure how far apart they are
pub fn cross_validate<G: ReferenceMap + IsoParametric>(
    geometry: &G,
    sample: &[G::T; 3],
) -> CrossValidation<G::T> {
    let library = geometry.physical_point(sample);
    let evaluator = forward_map::evaluate(sample, geometry.iso_parameters());
    CrossValidation {
        element_id: geometry.id(),
        sample: *sample,
        library,
        evaluator,
        discrepancy: distance(&library, &evaluator),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shapes::{curved_pyramid, linear_pyramid};
    use approx::*;

    #[test]
    fn test_linear_agreement() {
        let geometry = linear_pyramid::<f64>().unwrap();
        let result = cross_validate(&geometry, &[-0.125, -0.125, 0.125]);
        assert_eq!(result.element_id(), 1);
        assert!(result.discrepancy() < 1e-9);
        result.validate(&CheckOptions::default()).unwrap();
    }

    #[test]
    fn test_curved_discrepancy_is_measured() {
        let geometry = curved_pyramid::<f64>().unwrap();
        // Midpoint of the first base edge, which is bowed
        let result = cross_validate(&geometry, &[0.0, -1.0, -1.0]);
        assert!(result.discrepancy() > 1e-3);
        assert!(matches!(
            result.validate(&CheckOptions::default()),
            Err(Error::ConsistencyViolation { element_id: 2, .. })
        ));
        let mut options = CheckOptions::default();
        options.set_discrepancy_tolerance(None).unwrap();
        result.validate(&options).unwrap();
    }

    #[test]
    fn test_curved_corners_agree() {
        let geometry = curved_pyramid::<f64>().unwrap();
        let result = cross_validate(&geometry, &[1.0, 1.0, -1.0]);
        assert_relative_eq!(result.discrepancy(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_is_an_anomaly() {
        let geometry = linear_pyramid::<f64>().unwrap();
        let result = cross_validate(&geometry, &[f64::NAN, 0.0, 0.0]);
        assert!(!result.is_finite());
        assert!(matches!(
            result.validate(&CheckOptions::default()),
            Err(Error::NumericAnomaly { .. })
        ));
    }
}
