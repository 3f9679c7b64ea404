//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! A feasible basis is found in a first phase that minimizes the sum of artificial variables, after
//! which the second phase optimizes the actual objective.
use std::fmt;

use log::debug;

use crate::algorithm::{OptimizationResult, SolveOptions};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{ColumnType, Tableau};
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::SolveError;

pub mod tableau;
pub mod strategy;
pub mod phase_one;
pub mod phase_two;


/// One of the two phases of the algorithm.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Searching for a basic feasible solution.
    One,
    /// Optimizing the objective function.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
        })
    }
}

/// Solve a linear program in standard form with the two phase simplex method.
///
/// # Arguments
///
/// * `problem`: Problem to solve; all variables are non negative and the objective is maximized.
/// * `options`: Tolerance and pivot limit.
///
/// # Return value
///
/// Whether the problem is infeasible, unbounded, or has a finite optimum. In the latter case, the
/// solution is expressed in the variables of `problem`.
///
/// # Errors
///
/// If the solve was aborted, see `SolveError`.
pub fn solve<PR: PivotRule>(
    problem: &StandardForm,
    options: &SolveOptions,
) -> Result<OptimizationResult, SolveError> {
    let mut tableau = Tableau::new(problem, options.tolerance);
    debug!(
        "Solving {} constraints over {} variables, with {} slack and {} artificial columns",
        tableau.nr_constraints(),
        tableau.nr_columns_of_type(ColumnType::Normal),
        tableau.nr_columns_of_type(ColumnType::Slack),
        tableau.nr_columns_of_type(ColumnType::Artificial),
    );

    if tableau.has_phase_one_row() {
        match phase_one::primal::<PR>(&mut tableau, options.max_iterations)? {
            FeasibilityResult::Feasible(_) => {},
            FeasibilityResult::Infeasible => return Ok(OptimizationResult::Infeasible),
        }
    }

    phase_two::primal::<PR>(&mut tableau, options.max_iterations)
}

/// Fail when a phase has already pivoted as often as it is allowed to.
fn check_iteration_limit(
    phase: Phase,
    iteration: usize,
    max_iterations: Option<usize>,
) -> Result<(), SolveError> {
    match max_iterations {
        Some(limit) if iteration >= limit => Err(SolveError::IterationLimitExceeded { phase, limit }),
        _ => Ok(()),
    }
}
