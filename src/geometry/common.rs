//! Functionality common to the mapping routines

use crate::types::{real, to_f64, RealScalar};
use nalgebra::{Matrix3, Vector3};

/// Compute the determinant of a 3 by 3 matrix
pub fn compute_det33<T: RealScalar>(m: &[[T; 3]; 3]) -> T {
    [(0, 1, 2), (1, 2, 0), (2, 0, 1)]
        .iter()
        .map(|(i, j, k)| m[0][*i] * (m[1][*j] * m[2][*k] - m[1][*k] * m[2][*j]))
        .fold(T::zero(), |acc, x| acc + x)
}

/// Solve `m x = rhs` for a 3 by 3 matrix
///
/// The system is LU-factorised in double precision. Returns `None` if the matrix is
/// singular or if any entry of the system or its solution is not finite.
pub fn solve33<T: RealScalar>(m: &[[T; 3]; 3], rhs: &[T; 3]) -> Option<[T; 3]> {
    let matrix = Matrix3::from_fn(|i, j| to_f64(m[i][j]));
    let rhs = Vector3::from_fn(|i, _| to_f64(rhs[i]));
    if !matrix.iter().chain(rhs.iter()).all(|c| c.is_finite()) {
        return None;
    }
    from_vector3(&matrix.lu().solve(&rhs)?)
}

/// Least squares solution of `m x = rhs` using only the columns of `m` marked `free`
///
/// The components of `x` for the other columns are zero. Singular values below round-off
/// of the largest are discarded, so rank deficient systems get the minimum norm solution.
pub fn least_squares33<T: RealScalar>(
    m: &[[T; 3]; 3],
    rhs: &[T; 3],
    free: [bool; 3],
) -> Option<[T; 3]> {
    let matrix = Matrix3::from_fn(|i, j| if free[j] { to_f64(m[i][j]) } else { 0.0 });
    let rhs = Vector3::from_fn(|i, _| to_f64(rhs[i]));
    if !matrix.iter().chain(rhs.iter()).all(|c| c.is_finite()) {
        return None;
    }
    let svd = matrix.svd(true, true);
    let cutoff = 64.0 * f64::EPSILON * svd.singular_values.max();
    let mut x = from_vector3::<T>(&svd.solve(&rhs, cutoff).ok()?)?;
    for (c, f) in x.iter_mut().zip(free) {
        if !f {
            *c = T::zero();
        }
    }
    Some(x)
}

fn from_vector3<T: RealScalar>(x: &Vector3<f64>) -> Option<[T; 3]> {
    if x.iter().all(|c| c.is_finite()) {
        Some([real(x[0]), real(x[1]), real(x[2])])
    } else {
        None
    }
}

/// The Euclidean norm of a vector
pub fn norm<T: RealScalar>(v: &[T; 3]) -> T {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// The Euclidean distance between two points
pub fn distance<T: RealScalar>(a: &[T; 3], b: &[T; 3]) -> T {
    norm(&[a[0] - b[0], a[1] - b[1], a[2] - b[2]])
}
