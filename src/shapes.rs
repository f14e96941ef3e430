//! Literal pyramids used to exercise the coordinate maps

use crate::error::Result;
use crate::geometry::{PyramidBuilder, PyramidGeometry};
use crate::types::{real, RealScalar};

fn point<T: RealScalar>(p: [f64; 3]) -> [T; 3] {
    p.map(real::<T>)
}

/// Builder holding the vertices and edges of the warped pyramid, optionally with curved edges
fn warped_builder<T: RealScalar>(curved: bool) -> Result<PyramidBuilder<T>> {
    let mut b = PyramidBuilder::new();
    b.add_vertex(8, point([-1.0, -1.0, -0.6]))?;
    b.add_vertex(9, point([-0.5, -1.0, -0.6]))?;
    b.add_vertex(
        10,
        point([-0.479_483_436, -0.474_972_582, -0.661_479_046]),
    )?;
    b.add_vertex(11, point([-1.0, -0.5, -0.6]))?;
    b.add_vertex(
        107,
        point([-0.804_334_562, -0.747_833_332, -0.429_676_436]),
    )?;

    if curved {
        b.add_curved_edge(16, [8, 9], point([-0.75, -1.04, -0.6]))?;
    } else {
        b.add_edge(16, [8, 9])?;
    }
    b.add_edge(17, [9, 10])?;
    b.add_edge(18, [10, 11])?;
    b.add_edge(19, [11, 8])?;
    b.add_edge(402, [107, 8])?;
    b.add_edge(262, [9, 107])?;
    if curved {
        b.add_curved_edge(264, [10, 107], point([-0.62, -0.59, -0.53]))?;
    } else {
        b.add_edge(264, [10, 107])?;
    }
    b.add_edge(317, [11, 107])?;

    b.add_face(10, &[16, 17, 18, 19])?;
    b.add_face(410, &[16, 402, 262])?;
    b.add_face(223, &[17, 264, 262])?;
    b.add_face(287, &[18, 264, 317])?;
    b.add_face(382, &[19, 317, 402])?;
    Ok(b)
}

/// A straight-sided pyramid with a non-planar base (id 0)
///
/// Vertices 8, 9, 10, 11 form the base and vertex 107 is the apex.
pub fn warped_pyramid<T: RealScalar>() -> Result<PyramidGeometry<T>> {
    warped_builder(false)?
        .create_pyramid(0, [10, 410, 223, 287, 382])?
        .setup()
}

/// A straight-sided pyramid with a planar base (id 1)
///
/// Vertices 38, 53, 56, 41 form the base and vertex 101 is the apex.
pub fn linear_pyramid<T: RealScalar>() -> Result<PyramidGeometry<T>> {
    let vertex_ids = [38, 53, 56, 41, 101];
    let coords = [
        [0.0, 0.0, -0.6],
        [0.5, 0.0, -0.6],
        [0.55, 0.5425, -0.6],
        [0.0, 0.5, -0.6],
        [0.233551, 0.20215, -0.372506],
    ];
    let edge_ids = [116, 123, 124, 86, 239, 231, 230, 249];
    let edges = [
        [53, 38],
        [53, 56],
        [56, 41],
        [38, 41],
        [101, 38],
        [53, 101],
        [56, 101],
        [41, 101],
    ];
    let face_ids = [90, 185, 177, 213, 198];
    let faces: [&[usize]; 5] = [
        &[116, 123, 124, 86],
        &[116, 239, 231],
        &[123, 231, 230],
        &[124, 230, 249],
        &[86, 249, 239],
    ];

    let mut b = PyramidBuilder::new();
    for (id, c) in vertex_ids.iter().zip(coords) {
        b.add_vertex(*id, point(c))?;
    }
    for (id, e) in edge_ids.iter().zip(edges) {
        b.add_edge(*id, e)?;
    }
    for (id, f) in face_ids.iter().zip(faces) {
        b.add_face(*id, f)?;
    }
    b.create_pyramid(1, face_ids)?.setup()
}

/// The warped pyramid with a bowed base edge (16) and a bowed lateral edge (264) (id 2)
pub fn curved_pyramid<T: RealScalar>() -> Result<PyramidGeometry<T>> {
    warped_builder(true)?
        .create_pyramid(2, [10, 410, 223, 287, 382])?
        .setup()
}
