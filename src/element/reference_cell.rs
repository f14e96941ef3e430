//! Pyramid reference cell in collapsed coordinates
//!
//! Collapsed coordinates `eta` cover the cube `[-1, 1]^3`. The Cartesian reference
//! pyramid has its square base at `xi2 = -1` and its apex at `(-1, -1, 1)`, and
//! `eta0 = 2(1 + xi0)/(1 - xi2) - 1`, `eta1 = 2(1 + xi1)/(1 - xi2) - 1`, `eta2 = xi2`.
//! The whole face `eta2 = 1` of the cube collapses onto the apex.

use crate::types::{real, RealScalar, ReferenceCellType};

/// The vertices of the reference cell in collapsed coordinates
///
/// The apex is reported at `(-1, -1, 1)`, although every point with `eta2 = 1` maps onto it.
pub fn vertices<T: RealScalar>() -> [[T; 3]; 5] {
    let one = T::one();
    [
        [-one, -one, -one],
        [one, -one, -one],
        [one, one, -one],
        [-one, one, -one],
        [-one, -one, one],
    ]
}

/// The index of the apex vertex
pub const APEX: usize = 4;

/// The midpoint (centroid) of the cell in collapsed coordinates
pub fn midpoint<T: RealScalar>() -> [T; 3] {
    [T::zero(), T::zero(), real(-0.5)]
}

/// The edges of the reference cell
///
/// Edges 0 to 3 bound the base, edges 4 to 7 run from a base vertex to the apex.
pub fn edges() -> [[usize; 2]; 8] {
    [
        [0, 1],
        [1, 2],
        [3, 2],
        [0, 3],
        [0, 4],
        [1, 4],
        [2, 4],
        [3, 4],
    ]
}

/// The types of the faces of the reference cell
pub fn face_types() -> [ReferenceCellType; 5] {
    [
        ReferenceCellType::Quadrilateral,
        ReferenceCellType::Triangle,
        ReferenceCellType::Triangle,
        ReferenceCellType::Triangle,
        ReferenceCellType::Triangle,
    ]
}

/// The eight corners of the collapsed cube
///
/// Corners 0 to 3 are the base vertices; corners 4 to 7 lie above them and all map onto the apex.
pub fn corners<T: RealScalar>() -> [[T; 3]; 8] {
    let one = T::one();
    [
        [-one, -one, -one],
        [one, -one, -one],
        [one, one, -one],
        [-one, one, -one],
        [-one, -one, one],
        [one, -one, one],
        [one, one, one],
        [-one, one, one],
    ]
}

/// The vertex that each corner of the collapsed cube maps onto
pub fn corner_vertices() -> [usize; 8] {
    [0, 1, 2, 3, APEX, APEX, APEX, APEX]
}

/// Map Cartesian reference coordinates to collapsed coordinates
///
/// At the apex the first two collapsed coordinates are undetermined and are set to zero.
pub fn collapse<T: RealScalar>(xi: &[T; 3]) -> [T; 3] {
    let one = T::one();
    let two = real::<T>(2.0);
    let d = one - xi[2];
    if d.abs() < T::epsilon() {
        [T::zero(), T::zero(), xi[2]]
    } else {
        [
            two * (one + xi[0]) / d - one,
            two * (one + xi[1]) / d - one,
            xi[2],
        ]
    }
}

/// Map collapsed coordinates to Cartesian reference coordinates
pub fn uncollapse<T: RealScalar>(eta: &[T; 3]) -> [T; 3] {
    let one = T::one();
    let half = real::<T>(0.5);
    [
        half * (one + eta[0]) * (one - eta[2]) - one,
        half * (one + eta[1]) * (one - eta[2]) - one,
        eta[2],
    ]
}

/// Is the collapsed coordinate strictly inside the reference domain?
pub fn is_interior<T: RealScalar>(eta: &[T; 3]) -> bool {
    eta.iter().all(|c| c.abs() < T::one())
}

/// Clamp a collapsed coordinate into the reference domain
///
/// Non-finite components are replaced by the centroid's.
pub fn clamp<T: RealScalar>(eta: &[T; 3]) -> [T; 3] {
    let one = T::one();
    let centre = midpoint::<T>();
    let mut out = [T::zero(); 3];
    for (i, c) in eta.iter().enumerate() {
        out[i] = if c.is_finite() {
            c.max(-one).min(one)
        } else {
            centre[i]
        };
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::*;

    #[test]
    fn test_topology() {
        for (e_n, [v0, v1]) in edges().iter().enumerate() {
            assert!(v0 < v1);
            assert_eq!(*v1 == APEX, e_n >= 4);
        }
        assert_eq!(face_types()[0], ReferenceCellType::Quadrilateral);
        for t in &face_types()[1..] {
            assert_eq!(*t, ReferenceCellType::Triangle);
        }
    }

    #[test]
    fn test_corners_collapse_onto_vertices() {
        let v = vertices::<f64>();
        for (corner, vertex) in corners::<f64>().iter().zip(corner_vertices()) {
            let xi = uncollapse(corner);
            let target = uncollapse(&v[vertex]);
            for (a, b) in xi.iter().zip(&target) {
                assert_relative_eq!(*a, *b, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_collapse_inverts_uncollapse() {
        for eta in [[0.5, -0.25, 0.125], [-0.9, 0.9, -0.9], [0.0, 0.0, 0.0]] {
            let back = collapse(&uncollapse(&eta));
            for (a, b) in back.iter().zip(&eta) {
                assert_relative_eq!(*a, *b, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_collapse_at_apex() {
        let eta = collapse(&[-1.0, -1.0, 1.0]);
        assert_eq!(eta, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_interior_and_clamp() {
        assert!(is_interior(&[0.9, -0.9, 0.9]));
        assert!(!is_interior(&[1.0, 0.0, 0.0]));

        assert_eq!(clamp(&[2.0, -3.0, 0.25]), [1.0, -1.0, 0.25]);
        assert_eq!(clamp(&[f64::NAN, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }
}
