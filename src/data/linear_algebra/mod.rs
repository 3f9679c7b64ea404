//! # Linear algebra primitives
//!
//! The dense storage used for the simplex tableau.
pub mod matrix;
