//! # Phase one
//!
//! Finding a basic feasible solution by minimizing the sum of the artificial variables.
use log::{debug, trace};

use crate::algorithm::two_phase::{check_iteration_limit, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::error::SolveError;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// When that succeeds, the tableau is prepared for the second phase: artificial variables are
/// driven out of the basis, redundant rows are removed and the phase one row and artificial
/// columns are dropped.
///
/// # Arguments
///
/// * `tableau`: Tableau with a phase one row. The initial basis consists of slack and artificial
/// variables.
/// * `max_iterations`: Maximum number of pivots, if any.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, which rows were removed.
///
/// # Errors
///
/// If no row can leave the basis for a column that should enter it, or if the pivot limit is hit.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau,
    max_iterations: Option<usize>,
) -> Result<FeasibilityResult, SolveError> {
    debug_assert!(tableau.has_phase_one_row());

    let mut rule = PR::new();
    let mut iteration = 0;
    while let Some((column, cost)) = rule.select_primal_pivot_column(tableau) {
        check_iteration_limit(Phase::One, iteration, max_iterations)?;

        let row = tableau.select_primal_pivot_row(column)
            .ok_or(SolveError::NoLeavingRow { column })?;
        tableau.pivot(row, column);
        iteration += 1;
        trace!(
            "Phase one, iteration {}: column {} (cost {}) entered in row {}, objective {}",
            iteration, column, cost, row, tableau.objective_function_value(),
        );
    }

    let objective = tableau.objective_function_value();
    debug!("Phase one finished after {} pivots with objective value {}", iteration, objective);
    if !tableau.is_zero(objective) {
        return Ok(FeasibilityResult::Infeasible);
    }

    let rows_to_remove = tableau.remove_artificial_basis_variables();
    tableau.remove_artificial();

    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        debug!("Removed {} redundant rows: {:?}", rows_to_remove.len(), rows_to_remove);
        Rank::Deficient(rows_to_remove)
    };

    Ok(FeasibilityResult::Feasible(rank))
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// The problem is feasible and the tableau holds a basic feasible solution.
    Feasible(Rank),
    /// The problem is not feasible.
    Infeasible,
}

/// The constraints either have full rank, or are rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// No rows needed to be removed.
    Full,
    /// Indices of the rows that were removed. Sorted, without duplicates.
    Deficient(Vec<usize>),
}
