//! # Phase two
use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{check_iteration_limit, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SolveError;

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be non negative (primal feasibility)
/// - The phase one row and artificial columns should have been removed
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
///
/// # Errors
///
/// If the pivot limit is hit.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau,
    max_iterations: Option<usize>,
) -> Result<OptimizationResult, SolveError> {
    debug_assert!(!tableau.has_phase_one_row());

    let mut rule = PR::new();
    let mut iteration = 0;
    while let Some((column, cost)) = rule.select_primal_pivot_column(tableau) {
        check_iteration_limit(Phase::Two, iteration, max_iterations)?;

        match tableau.select_primal_pivot_row(column) {
            Some(row) => {
                tableau.pivot(row, column);
                iteration += 1;
                trace!(
                    "Phase two, iteration {}: column {} (cost {}) entered in row {}, objective {}",
                    iteration, column, cost, row, tableau.objective_function_value(),
                );
            },
            None => {
                debug!("Phase two: column {} has no leaving row, problem is unbounded", column);
                return Ok(OptimizationResult::Unbounded);
            },
        }
    }

    debug!(
        "Phase two finished after {} pivots with objective value {}",
        iteration, tableau.objective_function_value(),
    );
    Ok(OptimizationResult::FiniteOptimum(tableau.current_bfs()))
}
