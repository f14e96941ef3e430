//! Trait definitions

mod geometry;

pub use geometry::{Geometry, IsoParametric, PointLocator, ReferenceMap};
