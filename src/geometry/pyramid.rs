//! Pyramid elements
//!
//! A [Pyramid] holds resolved topology and cannot be mapped. [Pyramid::setup] finalises
//! it into a [PyramidGeometry], which owns the map coefficients and geometric factors.

use crate::element::iso_parameters::IsoParameters;
use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::geometry::entities::{Edge, Face, Vertex};
use crate::geometry::geom_factors::GeomFactors;
use crate::geometry::locate;
use crate::geometry::map::PyramidMap;
use crate::traits::{Geometry, IsoParametric, PointLocator, ReferenceMap};
use crate::types::{real, GeometryType, PointLocation, RealScalar, ReferenceCellType};
use std::sync::Arc;

/// A pyramid whose topology has been assembled but which has not been finalised
#[derive(Debug)]
pub struct Pyramid<T: RealScalar> {
    id: usize,
    faces: [Arc<Face<T>>; 5],
    vertices: [Arc<Vertex<T>>; 5],
    edges: [Arc<Edge<T>>; 8],
}

impl<T: RealScalar> Pyramid<T> {
    /// Assemble a pyramid from a quadrilateral base followed by four triangles
    ///
    /// The base vertices are ordered by the edge loop of the base, the apex is the vertex
    /// shared by the triangles, and each reference edge is matched to a supplied edge.
    pub fn new(id: usize, faces: [Arc<Face<T>>; 5]) -> Result<Self> {
        for (f_n, (face, cell_type)) in faces
            .iter()
            .zip(reference_cell::face_types())
            .enumerate()
        {
            if face.cell_type() != cell_type {
                return Err(Error::InvalidTopology(format!(
                    "face {f_n} ({}) of pyramid {id} is a {:?}, expected a {:?}",
                    face.id(),
                    face.cell_type(),
                    cell_type
                )));
            }
        }

        let base = faces[0].vertices();
        if base.len() != 4 {
            return Err(Error::InvalidTopology(format!(
                "base of pyramid {id} does not have four vertices"
            )));
        }
        // Vertex i of the loop sits between base edges i - 1 and i.
        let base_ids = base.iter().map(|v| v.id()).collect::<Vec<_>>();

        let apex = faces[1]
            .vertices()
            .into_iter()
            .find(|v| !base_ids.contains(&v.id()))
            .ok_or_else(|| {
                Error::InvalidTopology(format!(
                    "triangle {} of pyramid {id} lies in the base",
                    faces[1].id()
                ))
            })?;

        let mut covered = [false; 4];
        for face in &faces[1..] {
            let ids = face.vertex_ids();
            if !ids.contains(&apex.id()) {
                return Err(Error::InvalidTopology(format!(
                    "triangle {} of pyramid {id} does not contain the apex {}",
                    face.id(),
                    apex.id()
                )));
            }
            let side = (0..4).find(|i| {
                ids.contains(&base_ids[*i]) && ids.contains(&base_ids[(i + 1) % 4])
            });
            match side {
                Some(i) if !covered[i] => covered[i] = true,
                _ => {
                    return Err(Error::InvalidTopology(format!(
                        "triangle {} of pyramid {id} does not close a new side of the base",
                        face.id()
                    )))
                }
            }
        }

        let vertices = [
            base[0].clone(),
            base[1].clone(),
            base[2].clone(),
            base[3].clone(),
            apex,
        ];
        let vertex_ids = vertices.each_ref().map(|v| v.id());

        let mut edges = Vec::with_capacity(8);
        for [a, b] in reference_cell::edges() {
            let edge = faces
                .iter()
                .flat_map(|f| f.edges().iter())
                .find(|e| e.connects(vertex_ids[a], vertex_ids[b]))
                .cloned()
                .ok_or_else(|| {
                    Error::InvalidTopology(format!(
                        "pyramid {id} has no edge between vertices {} and {}",
                        vertex_ids[a], vertex_ids[b]
                    ))
                })?;
            edges.push(edge);
        }
        let edges: [Arc<Edge<T>>; 8] = edges
            .try_into()
            .map_err(|_| Error::InvalidTopology(format!("pyramid {id} does not have eight edges")))?;

        Ok(Self {
            id,
            faces,
            vertices,
            edges,
        })
    }

    /// The id of the pyramid
    pub fn id(&self) -> usize {
        self.id
    }

    /// The ids of the vertices: the base in loop order, then the apex
    pub fn vertex_ids(&self) -> [usize; 5] {
        self.vertices.each_ref().map(|v| v.id())
    }

    /// The ids of the edges, in reference order
    pub fn edge_ids(&self) -> [usize; 8] {
        self.edges.each_ref().map(|e| e.id())
    }

    /// The ids of the faces, in reference order
    pub fn face_ids(&self) -> [usize; 5] {
        self.faces.each_ref().map(|f| f.id())
    }

    /// The type of each face
    pub fn face_types(&self) -> [ReferenceCellType; 5] {
        self.faces.each_ref().map(|f| f.cell_type())
    }

    /// Does the pyramid have a curved edge?
    pub fn is_curved(&self) -> bool {
        self.edges.iter().any(|e| e.is_curved())
    }

    /// Finalise the pyramid
    ///
    /// This computes the geometric factors and fits the monomial coefficients of the map.
    pub fn setup(self) -> Result<PyramidGeometry<T>> {
        let vertices = self.vertices.each_ref().map(|v| *v.coordinates());
        let bubbles = self.edges.each_ref().map(|e| e.bubble());
        let scale = vertices
            .iter()
            .flatten()
            .fold(T::one(), |acc, c| acc.max(c.abs()));
        if !scale.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "non-finite vertex coordinate in pyramid {}",
                self.id
            )));
        }

        let map = PyramidMap::new(vertices, bubbles);
        let geom_factors = GeomFactors::compute(self.id, &map, scale)?;
        let iso_parameters = fit_iso_parameters(map.vertices());

        Ok(PyramidGeometry {
            topology: self,
            map,
            geom_factors,
            iso_parameters,
            scale,
        })
    }
}

/// Fit monomial coefficients to the vertices
///
/// With base vertices A, B, C, D and apex E, the coefficients interpolate the map at the
/// eight corners of the collapsed cube, the four upper corners all taking the value E.
fn fit_iso_parameters<T: RealScalar>(vertices: &[[T; 3]; 5]) -> IsoParameters<T> {
    let eighth = real::<T>(0.125);
    let four = real::<T>(4.0);
    let mut axes = [[T::zero(); 8]; 3];
    for (axis, c) in axes.iter_mut().enumerate() {
        let a = vertices[0][axis];
        let b = vertices[1][axis];
        let cc = vertices[2][axis];
        let d = vertices[3][axis];
        let e = vertices[4][axis];
        c[0] = (a + b + cc + d + four * e) * eighth;
        c[1] = (-a + b + cc - d) * eighth;
        c[2] = (-a - b + cc + d) * eighth;
        c[3] = (-a - b - cc - d + four * e) * eighth;
        c[4] = (a - b + cc - d) * eighth;
        c[5] = (a + b - cc - d) * eighth;
        c[6] = (a - b - cc + d) * eighth;
        c[7] = (-a + b - cc + d) * eighth;
    }
    IsoParameters::new(axes)
}

/// A finalised pyramid
#[derive(Debug)]
pub struct PyramidGeometry<T: RealScalar> {
    topology: Pyramid<T>,
    map: PyramidMap<T>,
    geom_factors: GeomFactors<T>,
    iso_parameters: IsoParameters<T>,
    scale: T,
}

impl<T: RealScalar> PyramidGeometry<T> {
    /// The assembled topology
    pub fn topology(&self) -> &Pyramid<T> {
        &self.topology
    }

    /// The geometric factors
    pub fn geom_factors(&self) -> &GeomFactors<T> {
        &self.geom_factors
    }

    /// The physical coordinates of the vertices: the base in loop order, then the apex
    pub fn vertices(&self) -> &[[T; 3]; 5] {
        self.map.vertices()
    }

    /// The physical image of each corner of the collapsed cube
    pub fn corner_points(&self) -> [[T; 3]; 8] {
        reference_cell::corner_vertices().map(|v| self.map.vertices()[v])
    }
}

impl<T: RealScalar> Geometry for PyramidGeometry<T> {
    type T = T;

    fn id(&self) -> usize {
        self.topology.id()
    }

    fn geometry_type(&self) -> GeometryType {
        self.geom_factors.geometry_type()
    }
}

impl<T: RealScalar> ReferenceMap for PyramidGeometry<T> {
    fn coordinate(&self, axis: usize, xi: &[T; 3]) -> Option<T> {
        (axis < 3).then(|| self.map.coordinate(axis, xi))
    }

    fn physical_point(&self, xi: &[T; 3]) -> [T; 3] {
        self.map.point(xi)
    }

    fn jacobian(&self, xi: &[T; 3]) -> [[T; 3]; 3] {
        self.map.jacobian(xi)
    }
}

impl<T: RealScalar> PointLocator for PyramidGeometry<T> {
    fn locate_point(&self, point: &[T; 3], tolerance: T) -> PointLocation<T> {
        locate::locate_point(self.id(), &self.map, point, tolerance, self.scale)
    }
}

impl<T: RealScalar> IsoParametric for PyramidGeometry<T> {
    fn iso_parameters(&self) -> &IsoParameters<T> {
        &self.iso_parameters
    }
}
