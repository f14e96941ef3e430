//! Pyramid builder

use crate::error::{Error, Result};
use crate::geometry::entities::{Edge, Face, Vertex};
use crate::geometry::pyramid::Pyramid;
use crate::types::{RealScalar, ReferenceCellType};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder that assembles pyramids from id-keyed vertices, edges and faces
///
/// Ids are resolved into shared handles as entities are added, so every entity must
/// be added after the entities it refers to. The id tables live in the builder only.
pub struct PyramidBuilder<T: RealScalar> {
    vertices: HashMap<usize, Arc<Vertex<T>>>,
    edges: HashMap<usize, Arc<Edge<T>>>,
    faces: HashMap<usize, Arc<Face<T>>>,
}

impl<T: RealScalar> Default for PyramidBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> PyramidBuilder<T> {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: HashMap::new(),
            faces: HashMap::new(),
        }
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, id: usize, coordinates: [T; 3]) -> Result<()> {
        if self.vertices.contains_key(&id) {
            return Err(Error::DuplicateEntity { kind: "vertex", id });
        }
        self.vertices
            .insert(id, Arc::new(Vertex::new(id, coordinates)));
        Ok(())
    }

    /// Add a straight edge between two vertices
    pub fn add_edge(&mut self, id: usize, vertices: [usize; 2]) -> Result<()> {
        let ends = self.edge_ends(id, vertices)?;
        self.edges.insert(id, Arc::new(Edge::new(id, ends)));
        Ok(())
    }

    /// Add a quadratic edge between two vertices passing through `midpoint`
    pub fn add_curved_edge(
        &mut self,
        id: usize,
        vertices: [usize; 2],
        midpoint: [T; 3],
    ) -> Result<()> {
        let ends = self.edge_ends(id, vertices)?;
        self.edges
            .insert(id, Arc::new(Edge::new_curved(id, ends, midpoint)));
        Ok(())
    }

    /// Add a face bounded by a closed loop of edges
    ///
    /// Three edges make a triangle and four edges a quadrilateral.
    pub fn add_face(&mut self, id: usize, edges: &[usize]) -> Result<()> {
        if self.faces.contains_key(&id) {
            return Err(Error::DuplicateEntity { kind: "face", id });
        }
        let cell_type = match edges.len() {
            3 => ReferenceCellType::Triangle,
            4 => ReferenceCellType::Quadrilateral,
            n => {
                return Err(Error::InvalidTopology(format!(
                    "face {id} has {n} edges, expected 3 or 4"
                )))
            }
        };
        let edges = edges
            .iter()
            .map(|e| {
                self.edges
                    .get(e)
                    .cloned()
                    .ok_or(Error::UnknownEntity { kind: "edge", id: *e })
            })
            .collect::<Result<Vec<_>>>()?;

        let n = edges.len();
        let mut loop_vertices = Vec::with_capacity(n);
        for i in 0..n {
            let v = edges[(i + n - 1) % n]
                .shared_vertex(&edges[i])
                .ok_or_else(|| {
                    Error::InvalidTopology(format!(
                        "edges {} and {} of face {id} do not share a vertex",
                        edges[(i + n - 1) % n].id(),
                        edges[i].id()
                    ))
                })?;
            if loop_vertices.contains(&v.id()) {
                return Err(Error::InvalidTopology(format!(
                    "edges of face {id} do not form a closed loop"
                )));
            }
            loop_vertices.push(v.id());
        }

        self.faces
            .insert(id, Arc::new(Face::new(id, cell_type, edges)));
        Ok(())
    }

    /// The edge with the given id
    pub fn edge(&self, id: usize) -> Option<&Arc<Edge<T>>> {
        self.edges.get(&id)
    }

    /// The face with the given id
    pub fn face(&self, id: usize) -> Option<&Arc<Face<T>>> {
        self.faces.get(&id)
    }

    /// Assemble a pyramid from a quadrilateral base followed by four triangles
    ///
    /// The returned pyramid must be finalised with [Pyramid::setup] before it can be mapped.
    pub fn create_pyramid(&self, id: usize, faces: [usize; 5]) -> Result<Pyramid<T>> {
        let lookup = |f: usize| {
            self.faces
                .get(&f)
                .cloned()
                .ok_or(Error::UnknownEntity { kind: "face", id: f })
        };
        Pyramid::new(
            id,
            [
                lookup(faces[0])?,
                lookup(faces[1])?,
                lookup(faces[2])?,
                lookup(faces[3])?,
                lookup(faces[4])?,
            ],
        )
    }

    fn edge_ends(&self, id: usize, vertices: [usize; 2]) -> Result<[Arc<Vertex<T>>; 2]> {
        if self.edges.contains_key(&id) {
            return Err(Error::DuplicateEntity { kind: "edge", id });
        }
        if vertices[0] == vertices[1] {
            return Err(Error::InvalidTopology(format!(
                "edge {id} starts and ends at vertex {}",
                vertices[0]
            )));
        }
        let lookup = |v: usize| {
            self.vertices
                .get(&v)
                .cloned()
                .ok_or(Error::UnknownEntity { kind: "vertex", id: v })
        };
        Ok([lookup(vertices[0])?, lookup(vertices[1])?])
    }
}
