//! Vertex and edge functions of the collapsed pyramid

use crate::element::reference_cell;
use crate::types::{real, RealScalar};

/// Signs of the first two collapsed coordinates at the base vertices
const BASE_SIGNS: [[f64; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];

/// For each base edge: the coordinate running along it, the fixed coordinate, and its sign
const BASE_EDGES: [(usize, usize, f64); 4] = [(0, 1, -1.0), (1, 0, 1.0), (0, 1, 1.0), (1, 0, -1.0)];

/// Values and first derivatives of a set of functions
///
/// `derivatives[j][k]` is the derivative of function `k` with respect to coordinate `j`.
struct Table<T, const N: usize> {
    values: [T; N],
    derivatives: [[T; N]; 3],
}

/// The map of a pyramid given by its vertices and the bubbles of its curved edges
///
/// `x(eta) = sum_v phi_v(eta) X_v + sum_k beta_k(eta) D_k` where `phi_v` are the vertex
/// functions and `beta_k` the quadratic edge bubbles, which vanish on all other edges
/// and at the apex.
#[derive(Debug, Clone)]
pub(crate) struct PyramidMap<T: RealScalar> {
    vertices: [[T; 3]; 5],
    bubbles: [Option<[T; 3]>; 8],
}

impl<T: RealScalar> PyramidMap<T> {
    pub fn new(vertices: [[T; 3]; 5], bubbles: [Option<[T; 3]>; 8]) -> Self {
        Self { vertices, bubbles }
    }

    pub fn vertices(&self) -> &[[T; 3]; 5] {
        &self.vertices
    }

    pub fn is_curved(&self) -> bool {
        self.bubbles.iter().any(|b| b.is_some())
    }

    fn vertex_functions(eta: &[T; 3]) -> Table<T, 5> {
        let one = T::one();
        let eighth = real::<T>(0.125);
        let mut table = Table {
            values: [T::zero(); 5],
            derivatives: [[T::zero(); 5]; 3],
        };
        let c = one - eta[2];
        for (v, [s0, s1]) in BASE_SIGNS.iter().enumerate() {
            let (s0, s1) = (real::<T>(*s0), real::<T>(*s1));
            let a = one + s0 * eta[0];
            let b = one + s1 * eta[1];
            table.values[v] = a * b * c * eighth;
            table.derivatives[0][v] = s0 * b * c * eighth;
            table.derivatives[1][v] = s1 * a * c * eighth;
            table.derivatives[2][v] = -a * b * eighth;
        }
        let half = real::<T>(0.5);
        table.values[reference_cell::APEX] = (one + eta[2]) * half;
        table.derivatives[2][reference_cell::APEX] = half;
        table
    }

    fn edge_functions(eta: &[T; 3]) -> Table<T, 8> {
        let one = T::one();
        let two = real::<T>(2.0);
        let quarter = real::<T>(0.25);
        let mut table = Table {
            values: [T::zero(); 8],
            derivatives: [[T::zero(); 8]; 3],
        };

        let c = one - eta[2];
        for (k, (r, f, s)) in BASE_EDGES.iter().enumerate() {
            let s = real::<T>(*s);
            let a = one - eta[*r] * eta[*r];
            let b = one + s * eta[*f];
            table.values[k] = a * b * c * quarter;
            table.derivatives[*r][k] = -two * eta[*r] * b * c * quarter;
            table.derivatives[*f][k] = s * a * c * quarter;
            table.derivatives[2][k] = -a * b * quarter;
        }

        let c = one - eta[2] * eta[2];
        for (v, [s0, s1]) in BASE_SIGNS.iter().enumerate() {
            let k = 4 + v;
            let (s0, s1) = (real::<T>(*s0), real::<T>(*s1));
            let a = one + s0 * eta[0];
            let b = one + s1 * eta[1];
            table.values[k] = c * a * b * quarter;
            table.derivatives[0][k] = s0 * c * b * quarter;
            table.derivatives[1][k] = s1 * c * a * quarter;
            table.derivatives[2][k] = -two * eta[2] * a * b * quarter;
        }
        table
    }

    /// Component `axis` of the image of a collapsed coordinate
    pub fn coordinate(&self, axis: usize, eta: &[T; 3]) -> T {
        let phi = Self::vertex_functions(eta);
        let mut value = phi
            .values
            .iter()
            .zip(self.vertices.iter())
            .fold(T::zero(), |acc, (p, x)| acc + *p * x[axis]);
        if self.is_curved() {
            let beta = Self::edge_functions(eta);
            for (b, bubble) in beta.values.iter().zip(self.bubbles.iter()) {
                if let Some(d) = bubble {
                    value = value + *b * d[axis];
                }
            }
        }
        value
    }

    /// The image of a collapsed coordinate
    pub fn point(&self, eta: &[T; 3]) -> [T; 3] {
        [
            self.coordinate(0, eta),
            self.coordinate(1, eta),
            self.coordinate(2, eta),
        ]
    }

    /// Derivatives of the map with respect to collapsed coordinates
    ///
    /// Entry `[i][j]` is the derivative of component `i` with respect to `eta[j]`.
    pub fn jacobian(&self, eta: &[T; 3]) -> [[T; 3]; 3] {
        let phi = Self::vertex_functions(eta);
        let mut jacobian = [[T::zero(); 3]; 3];
        for (i, row) in jacobian.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = phi.derivatives[j]
                    .iter()
                    .zip(self.vertices.iter())
                    .fold(T::zero(), |acc, (d, x)| acc + *d * x[i]);
            }
        }
        if self.is_curved() {
            let beta = Self::edge_functions(eta);
            for (k, bubble) in self.bubbles.iter().enumerate() {
                if let Some(d) = bubble {
                    for (i, row) in jacobian.iter_mut().enumerate() {
                        for (j, entry) in row.iter_mut().enumerate() {
                            *entry = *entry + beta.derivatives[j][k] * d[i];
                        }
                    }
                }
            }
        }
        jacobian
    }

    /// Derivatives of the map with respect to Cartesian reference coordinates
    ///
    /// `xi[2]` must lie below the apex.
    pub fn cartesian_jacobian(&self, xi: &[T; 3]) -> [[T; 3]; 3] {
        let one = T::one();
        let two = real::<T>(2.0);
        let eta = reference_cell::collapse(xi);
        let d = one - xi[2];
        let je = self.jacobian(&eta);
        let mut jacobian = [[T::zero(); 3]; 3];
        for (row, e) in jacobian.iter_mut().zip(je.iter()) {
            row[0] = e[0] * two / d;
            row[1] = e[1] * two / d;
            row[2] = e[0] * (one + eta[0]) / d + e[1] * (one + eta[1]) / d + e[2];
        }
        jacobian
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::*;

    fn vertices() -> [[f64; 3]; 5] {
        [
            [0.0, 0.0, -0.6],
            [0.5, 0.0, -0.6],
            [0.55, 0.5425, -0.6],
            [0.0, 0.5, -0.6],
            [0.233551, 0.20215, -0.372506],
        ]
    }

    fn curved_map() -> PyramidMap<f64> {
        let mut bubbles = [None; 8];
        bubbles[0] = Some([0.0, -0.05, 0.01]);
        bubbles[6] = Some([0.02, 0.03, -0.01]);
        PyramidMap::new(vertices(), bubbles)
    }

    #[test]
    fn test_partition_of_unity() {
        for eta in [[0.3, -0.7, 0.1], [-1.0, 1.0, -1.0], [0.9, 0.9, 0.99]] {
            let phi = PyramidMap::<f64>::vertex_functions(&eta);
            assert_relative_eq!(phi.values.iter().sum::<f64>(), 1.0, epsilon = 1e-14);
            for j in 0..3 {
                assert_relative_eq!(phi.derivatives[j].iter().sum::<f64>(), 0.0, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_vertices_interpolated() {
        let map = curved_map();
        for (corner, v) in reference_cell::corners::<f64>()
            .iter()
            .zip(reference_cell::corner_vertices())
        {
            let x = map.point(corner);
            for (a, b) in x.iter().zip(&vertices()[v]) {
                assert_relative_eq!(*a, *b, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_curved_edge_midpoints() {
        let map = curved_map();
        let x = map.point(&[0.0, -1.0, -1.0]);
        assert_relative_eq!(x[0], 0.25, epsilon = 1e-14);
        assert_relative_eq!(x[1], -0.05, epsilon = 1e-14);
        assert_relative_eq!(x[2], -0.59, epsilon = 1e-14);

        let v = vertices();
        let x = map.point(&[1.0, 1.0, 0.0]);
        for i in 0..3 {
            let chord = 0.5 * (v[2][i] + v[4][i]);
            assert_relative_eq!(x[i], chord + [0.02, 0.03, -0.01][i], epsilon = 1e-14);
        }
    }

    #[test]
    fn test_jacobian_matches_finite_differences() {
        let map = curved_map();
        let eta = [0.3, -0.4, 0.2];
        let h = 1e-6;
        let jacobian = map.jacobian(&eta);
        for j in 0..3 {
            let mut plus = eta;
            let mut minus = eta;
            plus[j] += h;
            minus[j] -= h;
            let xp = map.point(&plus);
            let xm = map.point(&minus);
            for i in 0..3 {
                assert_relative_eq!(jacobian[i][j], (xp[i] - xm[i]) / (2.0 * h), epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn test_cartesian_jacobian_matches_finite_differences() {
        let map = curved_map();
        let xi = reference_cell::uncollapse(&[0.3, -0.4, 0.2]);
        let h = 1e-6;
        let jacobian = map.cartesian_jacobian(&xi);
        for j in 0..3 {
            let mut plus = xi;
            let mut minus = xi;
            plus[j] += h;
            minus[j] -= h;
            let xp = map.point(&reference_cell::collapse(&plus));
            let xm = map.point(&reference_cell::collapse(&minus));
            for i in 0..3 {
                assert_relative_eq!(jacobian[i][j], (xp[i] - xm[i]) / (2.0 * h), epsilon = 1e-7);
            }
        }
    }
}
