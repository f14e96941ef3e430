//! Vertices, edges and faces shared between elements

use crate::types::{real, RealScalar, ReferenceCellType};
use std::sync::Arc;

/// A vertex
#[derive(Debug, PartialEq)]
pub struct Vertex<T: RealScalar> {
    id: usize,
    coordinates: [T; 3],
}

impl<T: RealScalar> Vertex<T> {
    /// Create a vertex
    pub fn new(id: usize, coordinates: [T; 3]) -> Self {
        Self { id, coordinates }
    }

    /// The id of the vertex
    pub fn id(&self) -> usize {
        self.id
    }

    /// The physical coordinates of the vertex
    pub fn coordinates(&self) -> &[T; 3] {
        &self.coordinates
    }
}

/// An edge between two vertices, straight or curved through a midpoint
#[derive(Debug)]
pub struct Edge<T: RealScalar> {
    id: usize,
    vertices: [Arc<Vertex<T>>; 2],
    midpoint: Option<[T; 3]>,
}

impl<T: RealScalar> Edge<T> {
    /// Create a straight edge
    pub fn new(id: usize, vertices: [Arc<Vertex<T>>; 2]) -> Self {
        Self {
            id,
            vertices,
            midpoint: None,
        }
    }

    /// Create a quadratic edge passing through `midpoint`
    pub fn new_curved(id: usize, vertices: [Arc<Vertex<T>>; 2], midpoint: [T; 3]) -> Self {
        Self {
            id,
            vertices,
            midpoint: Some(midpoint),
        }
    }

    /// The id of the edge
    pub fn id(&self) -> usize {
        self.id
    }

    /// The two end vertices
    pub fn vertices(&self) -> &[Arc<Vertex<T>>; 2] {
        &self.vertices
    }

    /// The ids of the two end vertices
    pub fn vertex_ids(&self) -> [usize; 2] {
        [self.vertices[0].id(), self.vertices[1].id()]
    }

    /// Is the edge curved?
    pub fn is_curved(&self) -> bool {
        self.midpoint.is_some()
    }

    /// Offset of the curved midpoint from the midpoint of the chord
    ///
    /// This is `None` for a straight edge.
    pub fn bubble(&self) -> Option<[T; 3]> {
        let chord = self.chord_midpoint();
        self.midpoint
            .map(|m| [m[0] - chord[0], m[1] - chord[1], m[2] - chord[2]])
    }

    /// Does the edge connect the two given vertices, in either direction?
    pub fn connects(&self, a: usize, b: usize) -> bool {
        let [v0, v1] = self.vertex_ids();
        (v0 == a && v1 == b) || (v0 == b && v1 == a)
    }

    /// The vertex shared with another edge
    pub fn shared_vertex(&self, other: &Edge<T>) -> Option<Arc<Vertex<T>>> {
        self.vertices
            .iter()
            .find(|v| other.vertex_ids().contains(&v.id()))
            .cloned()
    }

    fn chord_midpoint(&self) -> [T; 3] {
        let half = real::<T>(0.5);
        let a = self.vertices[0].coordinates();
        let b = self.vertices[1].coordinates();
        [
            half * (a[0] + b[0]),
            half * (a[1] + b[1]),
            half * (a[2] + b[2]),
        ]
    }
}

/// A triangular or quadrilateral face bounded by a closed loop of edges
#[derive(Debug)]
pub struct Face<T: RealScalar> {
    id: usize,
    cell_type: ReferenceCellType,
    edges: Vec<Arc<Edge<T>>>,
}

impl<T: RealScalar> Face<T> {
    /// Create a face
    ///
    /// The edges must form a closed loop; this is checked by the
    /// [builder](crate::geometry::builder::PyramidBuilder).
    pub(crate) fn new(id: usize, cell_type: ReferenceCellType, edges: Vec<Arc<Edge<T>>>) -> Self {
        Self {
            id,
            cell_type,
            edges,
        }
    }

    /// The id of the face
    pub fn id(&self) -> usize {
        self.id
    }

    /// The type of the face
    pub fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }

    /// The edges of the face, in loop order
    pub fn edges(&self) -> &[Arc<Edge<T>>] {
        &self.edges
    }

    /// The vertices of the face, in loop order
    ///
    /// Vertex `i` is the vertex shared by edges `i - 1` and `i`.
    pub fn vertices(&self) -> Vec<Arc<Vertex<T>>> {
        let n = self.edges.len();
        (0..n)
            .filter_map(|i| self.edges[(i + n - 1) % n].shared_vertex(&self.edges[i]))
            .collect()
    }

    /// The ids of the vertices of the face, in loop order
    pub fn vertex_ids(&self) -> Vec<usize> {
        self.vertices().iter().map(|v| v.id()).collect()
    }
}
