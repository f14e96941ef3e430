use approx::assert_relative_eq;
use pyrmap::geometry::PyramidBuilder;
use pyrmap::traits::{Geometry, ReferenceMap};
use pyrmap::types::{GeometryType, ReferenceCellType};
use pyrmap::Error;

/// A unit square base with the apex above its centre
fn builder(apex: [f64; 3]) -> PyramidBuilder<f64> {
    let mut b = PyramidBuilder::new();
    b.add_vertex(0, [0.0, 0.0, 0.0]).unwrap();
    b.add_vertex(1, [1.0, 0.0, 0.0]).unwrap();
    b.add_vertex(2, [1.0, 1.0, 0.0]).unwrap();
    b.add_vertex(3, [0.0, 1.0, 0.0]).unwrap();
    b.add_vertex(4, apex).unwrap();
    b.add_edge(0, [0, 1]).unwrap();
    b.add_edge(1, [1, 2]).unwrap();
    b.add_edge(2, [2, 3]).unwrap();
    b.add_edge(3, [3, 0]).unwrap();
    b.add_edge(4, [0, 4]).unwrap();
    b.add_edge(5, [1, 4]).unwrap();
    b.add_edge(6, [2, 4]).unwrap();
    b.add_edge(7, [3, 4]).unwrap();
    b.add_face(0, &[0, 1, 2, 3]).unwrap();
    b.add_face(1, &[0, 5, 4]).unwrap();
    b.add_face(2, &[1, 6, 5]).unwrap();
    b.add_face(3, &[2, 7, 6]).unwrap();
    b.add_face(4, &[3, 4, 7]).unwrap();
    b
}

#[test]
fn test_assemble_and_setup() {
    let b = builder([0.5, 0.5, 1.0]);
    let pyramid = b.create_pyramid(5, [0, 1, 2, 3, 4]).unwrap();
    assert_eq!(pyramid.id(), 5);
    assert_eq!(pyramid.vertex_ids(), [0, 1, 2, 3, 4]);
    assert_eq!(pyramid.face_types()[0], ReferenceCellType::Quadrilateral);
    assert!(!pyramid.is_curved());

    let geometry = pyramid.setup().unwrap();
    assert_eq!(geometry.id(), 5);
    assert_eq!(geometry.geometry_type(), GeometryType::Regular);
    assert_relative_eq!(geometry.geom_factors().volume(), 1.0 / 3.0, epsilon = 1e-13);
    // The Cartesian Jacobian of a regular pyramid is constant
    assert_relative_eq!(geometry.geom_factors().min_jacobian(), 0.125, epsilon = 1e-13);
    assert_relative_eq!(geometry.geom_factors().max_jacobian(), 0.125, epsilon = 1e-13);

    let apex = geometry.physical_point(&[-1.0, 1.0, 1.0]);
    assert_relative_eq!(apex[0], 0.5);
    assert_relative_eq!(apex[1], 0.5);
    assert_relative_eq!(apex[2], 1.0);
}

#[test]
fn test_builder_is_reusable() {
    let b = builder([0.5, 0.5, 1.0]);
    let first = b.create_pyramid(0, [0, 1, 2, 3, 4]).unwrap().setup().unwrap();
    let second = b.create_pyramid(1, [0, 4, 3, 2, 1]).unwrap().setup().unwrap();
    assert_relative_eq!(
        first.geom_factors().volume(),
        second.geom_factors().volume(),
        epsilon = 1e-14
    );
}

#[test]
fn test_unknown_face() {
    let b = builder([0.5, 0.5, 1.0]);
    assert!(matches!(
        b.create_pyramid(0, [0, 1, 2, 3, 9]),
        Err(Error::UnknownEntity { kind: "face", id: 9 })
    ));
}

#[test]
fn test_base_must_come_first() {
    let b = builder([0.5, 0.5, 1.0]);
    assert!(matches!(
        b.create_pyramid(0, [1, 0, 2, 3, 4]),
        Err(Error::InvalidTopology(_))
    ));
}

#[test]
fn test_repeated_triangle() {
    let b = builder([0.5, 0.5, 1.0]);
    assert!(matches!(
        b.create_pyramid(0, [0, 1, 1, 3, 4]),
        Err(Error::InvalidTopology(_))
    ));
}

#[test]
fn test_inverted_pyramid() {
    let b = builder([0.5, 0.5, -1.0]);
    let pyramid = b.create_pyramid(0, [0, 1, 2, 3, 4]).unwrap();
    assert!(matches!(pyramid.setup(), Err(Error::InvalidGeometry(_))));
}

#[test]
fn test_curved_edge() {
    let mut b = PyramidBuilder::new();
    b.add_vertex(0, [0.0, 0.0, 0.0]).unwrap();
    b.add_vertex(1, [1.0, 0.0, 0.0]).unwrap();
    b.add_curved_edge(0, [0, 1], [0.5, -0.1, 0.0]).unwrap();
    let edge = b.edge(0).unwrap();
    assert!(edge.is_curved());
    let bubble = edge.bubble().unwrap();
    assert_relative_eq!(bubble[1], -0.1);
    assert!(matches!(
        b.add_curved_edge(0, [0, 1], [0.5, 0.1, 0.0]),
        Err(Error::DuplicateEntity { kind: "edge", id: 0 })
    ));
}
