//! # Strategies
//!
//! Decisions that the simplex method leaves open, such as which column enters the basis.
pub mod pivot_rule;
