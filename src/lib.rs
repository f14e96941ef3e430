//! Pyrmap
//!
//! Consistency checks for the reference-to-physical coordinate map of
//! (possibly curved) pyramidal elements.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod check;
pub mod element;
pub mod error;
pub mod geometry;
pub mod shapes;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
