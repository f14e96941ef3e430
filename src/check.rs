//! Consistency checks of pyramid coordinate maps
//!
//! The [forward map evaluator](forward_map) re-derives the element map from its monomial
//! coefficients, independently of the element's own map. The [round trip](round_trip)
//! and [cross-validation](cross_validation) checks compare the two against each other and
//! against point location.

pub mod cross_validation;
pub mod forward_map;
mod options;
pub mod report;
pub mod round_trip;
pub mod samples;

pub use cross_validation::{cross_validate, CrossValidation};
pub use options::CheckOptions;
pub use report::ConsistencyReport;
pub use round_trip::{check_round_trip, ConsistencyResult};
