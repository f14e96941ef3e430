//! Point location by damped Newton iteration

use crate::element::reference_cell;
use crate::geometry::common::{least_squares33, norm, solve33};
use crate::geometry::map::PyramidMap;
use crate::types::{real, PointLocation, RealScalar};
use log::debug;

/// Maximum number of iterations in each stage
pub(crate) const MAX_ITERATIONS: usize = 51;

/// Maximum number of step halvings in a line search
const MAX_HALVINGS: usize = 30;

/// Gap kept between Newton iterates and the apex, where the collapse is singular
fn apex_gap<T: RealScalar>() -> T {
    real::<T>(1e-12).max(T::epsilon() * real(4.0))
}

fn residual<T: RealScalar>(map: &PyramidMap<T>, eta: &[T; 3], point: &[T; 3]) -> [T; 3] {
    let image = map.point(eta);
    [
        image[0] - point[0],
        image[1] - point[1],
        image[2] - point[2],
    ]
}

/// Backtracking line search along `step`
///
/// Returns the first trial whose residual norm is below `current`, with that norm.
fn line_search<T: RealScalar>(
    step: &[T; 3],
    current: T,
    trial: impl Fn(T) -> Option<([T; 3], T)>,
) -> Option<([T; 3], T)> {
    let half = real::<T>(0.5);
    let mut alpha = T::one();
    for _ in 0..MAX_HALVINGS {
        if let Some((next, next_norm)) = trial(alpha) {
            if next_norm < current {
                return Some((next, next_norm));
            }
        }
        alpha = alpha * half;
    }
    debug!("Line search along {step:?} made no progress from residual {current:e}");
    None
}

/// Newton iteration on Cartesian reference coordinates, starting from the centroid
///
/// Returns the final iterate in Cartesian reference coordinates.
fn newton<T: RealScalar>(
    id: usize,
    map: &PyramidMap<T>,
    point: &[T; 3],
    residual_tolerance: T,
) -> [T; 3] {
    let one = T::one();
    let gap = apex_gap::<T>();
    let mut xi = reference_cell::uncollapse(&reference_cell::midpoint::<T>());
    let mut r = residual(map, &reference_cell::collapse(&xi), point);
    let mut residual_norm = norm(&r);

    for iteration in 0..MAX_ITERATIONS {
        if !residual_norm.is_finite() {
            debug!("Non-finite residual locating {point:?} in element {id}");
            break;
        }
        if residual_norm <= residual_tolerance {
            break;
        }
        let Some(step) = solve33(&map.cartesian_jacobian(&xi), &r) else {
            debug!("Singular Jacobian at iteration {iteration} locating {point:?} in element {id}");
            break;
        };
        let trial = |alpha: T| {
            let mut next = [
                xi[0] - alpha * step[0],
                xi[1] - alpha * step[1],
                xi[2] - alpha * step[2],
            ];
            next[2] = next[2].min(one - gap);
            if next.iter().all(|c| c.is_finite()) {
                let r = residual(map, &reference_cell::collapse(&next), point);
                Some((next, norm(&r)))
            } else {
                None
            }
        };
        let Some((next, next_norm)) = line_search(&step, residual_norm, trial) else {
            break;
        };
        xi = next;
        residual_norm = next_norm;
        r = residual(map, &reference_cell::collapse(&xi), point);
    }
    xi
}

/// Projected Gauss-Newton iteration on collapsed coordinates
///
/// Minimises the distance between the image of `eta` and `point` over the reference domain.
/// A coordinate on a face of the domain is held fixed while the gradient pushes it outwards.
fn project<T: RealScalar>(
    id: usize,
    map: &PyramidMap<T>,
    point: &[T; 3],
    residual_tolerance: T,
    start: [T; 3],
) -> ([T; 3], T) {
    let one = T::one();
    let zero = T::zero();
    let mut eta = reference_cell::clamp(&start);
    let mut r = residual(map, &eta, point);
    let mut residual_norm = norm(&r);

    for _ in 0..MAX_ITERATIONS {
        if !residual_norm.is_finite() || residual_norm <= residual_tolerance {
            break;
        }
        let jacobian = map.jacobian(&eta);
        let mut free = [true; 3];
        for (j, f) in free.iter_mut().enumerate() {
            let gradient = (0..3).fold(zero, |acc, i| acc + jacobian[i][j] * r[i]);
            *f = !((eta[j] >= one && gradient < zero) || (eta[j] <= -one && gradient > zero));
        }
        let Some(step) = least_squares33(&jacobian, &r, free) else {
            debug!("No descent direction locating {point:?} in element {id}");
            break;
        };
        let trial = |alpha: T| {
            let next = reference_cell::clamp(&[
                eta[0] - alpha * step[0],
                eta[1] - alpha * step[1],
                eta[2] - alpha * step[2],
            ]);
            Some((next, norm(&residual(map, &next, point))))
        };
        let Some((next, next_norm)) = line_search(&step, residual_norm, trial) else {
            break;
        };
        eta = next;
        residual_norm = next_norm;
        r = residual(map, &eta, point);
    }
    (eta, residual_norm)
}

/// Locate a physical point in a pyramid
///
/// A damped Newton iteration runs on Cartesian reference coordinates, where the map stays
/// regular away from the apex. Its result is clamped into the reference domain and refined
/// by projected Gauss-Newton steps, so points outside the element end at their nearest point
/// on the element's boundary. A point is inside when the residual there is below `tolerance`,
/// or below the round-off allowed for coordinates of size `scale`.
pub(crate) fn locate_point<T: RealScalar>(
    id: usize,
    map: &PyramidMap<T>,
    point: &[T; 3],
    tolerance: T,
    scale: T,
) -> PointLocation<T> {
    let residual_tolerance = tolerance.max(T::epsilon() * real(64.0) * scale);
    let xi = newton(id, map, point, residual_tolerance);
    let (eta, residual_norm) = project(
        id,
        map,
        point,
        residual_tolerance,
        reference_cell::collapse(&xi),
    );

    if residual_norm <= residual_tolerance {
        PointLocation::Inside { reference: eta }
    } else {
        debug!("Point {point:?} is {residual_norm:e} from element {id}");
        PointLocation::Outside {
            distance: residual_norm,
            nearest_reference: eta,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::common::distance;
    use approx::*;

    fn map() -> PyramidMap<f64> {
        let vertices = [
            [0.0, 0.0, -0.6],
            [0.5, 0.0, -0.6],
            [0.55, 0.5425, -0.6],
            [0.0, 0.5, -0.6],
            [0.233551, 0.20215, -0.372506],
        ];
        PyramidMap::new(vertices, [None; 8])
    }

    #[test]
    fn test_locate_interior() {
        let map = map();
        let eta = [0.4, -0.6, 0.3];
        let point = map.point(&eta);
        match locate_point(0, &map, &point, 1e-12, 1.0) {
            PointLocation::Inside { reference } => {
                for (a, b) in reference.iter().zip(&eta) {
                    assert_relative_eq!(*a, *b, epsilon = 1e-10);
                }
            }
            PointLocation::Outside { .. } => panic!("Point should be inside"),
        }
    }

    #[test]
    fn test_locate_exterior() {
        let map = map();
        let location = locate_point(0, &map, &[0.25, 0.25, 1.0], 1e-12, 1.0);
        assert!(!location.is_inside());
        assert!(location.distance() > 1.0);
    }

    fn curved_map() -> PyramidMap<f64> {
        let vertices = [
            [-1.0, -1.0, -0.6],
            [-0.5, -1.0, -0.6],
            [-0.479483436, -0.474972582, -0.661479046],
            [-1.0, -0.5, -0.6],
            [-0.804334562, -0.747833332, -0.429676436],
        ];
        let mut bubbles = [None; 8];
        bubbles[0] = Some([0.0, -0.04, 0.0]);
        bubbles[6] = Some([0.021908999, 0.021402957, 0.015577741]);
        PyramidMap::new(vertices, bubbles)
    }

    #[test]
    fn test_locate_near_apex() {
        let map = curved_map();
        for eta in [
            [0.99999, -0.99999, 0.999999],
            [0.0, 0.0, 0.99999999],
            [0.9999999, 0.9999999, 0.9999999],
            [0.3, -0.4, 1.0 - 1e-11],
        ] {
            let point = map.point(&eta);
            let location = locate_point(2, &map, &point, 1e-12, 1.0);
            assert!(location.is_inside(), "{eta:?} reported outside");
            let recovered = map.point(&location.reference());
            assert!(distance(&recovered, &point) < 1e-9);
        }
    }

    #[test]
    fn test_locate_beside_base_corner() {
        // The nearest point of the element is the vertex (0.55, 0.5425, -0.6)
        let map = map();
        let location = locate_point(1, &map, &[1.5, 1.5, -0.4], 1e-12, 1.0);
        assert!(!location.is_inside());
        assert_relative_eq!(location.distance(), 1.3635638048877654, epsilon = 1e-9);
        assert_relative_eq!(
            distance(&map.point(&location.reference()), &[0.55, 0.5425, -0.6]),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_locate_beside_base_edge() {
        let map = map();
        let point = [-1.5, 0.25, -0.5];
        let location = locate_point(1, &map, &point, 1e-12, 1.0);
        assert!(!location.is_inside());
        assert_relative_eq!(location.distance(), 1.5033296378372907, epsilon = 1e-9);
        // The reported distance is attained at the reported reference point
        assert_relative_eq!(
            distance(&map.point(&location.reference()), &point),
            location.distance(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_locate_non_finite() {
        let map = map();
        let location = locate_point(0, &map, &[f64::NAN, 0.25, 0.0], 1e-12, 1.0);
        assert!(!location.is_inside());
        assert!(location.distance().is_nan());
        assert!(location.reference().iter().all(|c| c.is_finite()));
    }
}
