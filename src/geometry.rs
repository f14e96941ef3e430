//! Pyramid assembly, finalisation and mapping

pub mod builder;
pub(crate) mod common;
pub mod entities;
pub mod geom_factors;
mod locate;
mod map;
pub mod pyramid;

pub use builder::PyramidBuilder;
pub use geom_factors::GeomFactors;
pub use pyramid::{Pyramid, PyramidGeometry};
