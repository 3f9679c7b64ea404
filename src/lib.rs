//! # A linear program solver
//!
//! Linear programs are solved using the two phase Simplex Method on a dense tableau, as described in
//! the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! A problem is described with a `ProblemBuilder`, which produces a `GeneralForm`. That problem is
//! brought into standard form, solved, and the solution is expressed in the original variables
//! again.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
