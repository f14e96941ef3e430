//! Reference samples for the checks
//!
//! All samples are collapsed reference coordinates.

use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::types::{real, RealScalar};
use itertools::iproduct;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// The eight corners of the reference cube
pub fn corners<T: RealScalar>() -> Vec<[T; 3]> {
    reference_cell::corners().to_vec()
}

/// Check that an extent lies in (0, 1]
fn check_extent(extent: f64) -> Result<()> {
    if extent > 0.0 && extent <= 1.0 {
        Ok(())
    } else {
        Err(Error::Precondition(format!(
            "sample extent must lie in (0, 1], got {extent}"
        )))
    }
}

/// A tensor grid of `n` points per axis covering `[-extent, extent]^3`
///
/// A single point per axis gives the centre of the cube. Samples are ordered with the
/// last axis varying fastest.
pub fn interior_grid<T: RealScalar>(n: usize, extent: f64) -> Result<Vec<[T; 3]>> {
    check_extent(extent)?;
    let axis = match n {
        0 => {
            return Err(Error::Precondition(
                "a sample grid needs at least one point per axis".to_string(),
            ))
        }
        1 => vec![0.0],
        _ => (0..n)
            .map(|i| -extent + 2.0 * extent * i as f64 / (n - 1) as f64)
            .collect(),
    };
    Ok(iproduct!(axis.iter(), axis.iter(), axis.iter())
        .map(|(a, b, c)| [real(*a), real(*b), real(*c)])
        .collect())
}

/// `count` samples drawn uniformly from `[-extent, extent]^3`
pub fn random_interior<T: RealScalar, R: Rng>(
    count: usize,
    extent: f64,
    rng: &mut R,
) -> Result<Vec<[T; 3]>> {
    check_extent(extent)?;
    let between = Uniform::new_inclusive(-extent, extent);
    Ok((0..count)
        .map(|_| {
            [
                real(between.sample(rng)),
                real(between.sample(rng)),
                real(between.sample(rng)),
            ]
        })
        .collect())
}

/// `count` samples whose last coordinate approaches the apex
///
/// Sample `k` has last coordinate `1 - 10^-(k+1)`.
pub fn approaching_apex<T: RealScalar>(count: usize) -> Vec<[T; 3]> {
    (0..count)
        .map(|k| {
            let gap = 10f64.powi(-(k as i32 + 1));
            [real(0.3), real(-0.4), T::one() - real(gap)]
        })
        .collect()
}
