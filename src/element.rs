//! Reference pyramid, monomial basis and map coefficients

pub mod iso_parameters;
pub mod polynomials;
pub mod reference_cell;
