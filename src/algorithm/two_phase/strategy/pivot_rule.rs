//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only columns with a negative relative cost in the cost row that is currently optimized are
    /// candidates. The right-hand side column is never considered.
    ///
    /// # Return value
    ///
    /// The column index together with its relative cost, or `None` if the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| tableau.is_negative(cost))
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// This is Dantzig's rule. When several columns have the same cost, the one with the lowest index
/// is selected.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in (0..tableau.nr_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| tableau.is_negative(cost)) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest
    }
}
