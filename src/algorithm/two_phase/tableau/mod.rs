//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is a single dense matrix. Its columns are laid out in groups:
//!
//! ```text
//! | normal | slack and surplus | artificial | b |
//! ```
//!
//! and its rows are the constraints, followed by the objective row and, while a feasible basis is
//! being searched for, the phase one row.
use std::fmt::{Display, Formatter, Result as FormatResult};

use cumsum::cumsum_array_owned;
use enum_map::{Enum, enum_map, EnumMap};
use itertools::repeat_n;
use num_traits::{One, Zero};

use crate::algorithm::BasicSolution;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::ConstraintRelation;
use crate::data::linear_program::function::variable_name;
use crate::data::linear_program::standard_form::StandardForm;


/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// The basis is not stored explicitly: a column is in the basis for a row when it is a unit column
/// with its one in that row. See `Tableau::basis_row`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    /// Constraint rows, the objective row and possibly the phase one row.
    matrix: DenseMatrix,
    /// Indices that separate the different column groups.
    ///
    /// The right-hand side column is at index `column_group_end[ColumnType::Artificial]`.
    column_group_end: EnumMap<ColumnType, usize>,
    /// Number of constraint rows; the objective row has this index.
    nr_constraints: usize,
    /// Whether the last row is the phase one row.
    has_phase_one_row: bool,
    /// Absolute values up to this one are treated as zero.
    tolerance: f64,
}

/// Kinds of columns, in the order in which they appear in the tableau.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables of the `StandardForm`.
    Normal,
    /// Slack (`<=`) and surplus (`>=`) variables.
    Slack,
    /// Artificial variables for the `>=` and `=` constraints.
    Artificial,
}

impl Tableau {
    /// Create the initial tableau for a problem in standard form.
    ///
    /// A constraint with a negative right-hand side is multiplied by `-1` first, equality
    /// constraints included, such that the initial basis of slack and artificial variables is
    /// feasible.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `tolerance`: Absolute values up to this one are treated as zero.
    pub fn new(problem: &StandardForm, tolerance: f64) -> Self {
        let relations = problem.constraints().iter()
            .map(|constraint| {
                if constraint.rhs() < f64::zero() {
                    !constraint.relation()
                } else {
                    constraint.relation()
                }
            })
            .collect::<Vec<_>>();
        let nr_slack = relations.iter()
            .filter(|&&relation| relation != ConstraintRelation::Equal)
            .count();
        let nr_artificial = relations.iter()
            .filter(|&&relation| relation != ConstraintRelation::Less)
            .count();

        let cumulative = cumsum_array_owned([problem.nr_variables(), nr_slack, nr_artificial]);
        let column_group_end = enum_map! {
            ColumnType::Normal     => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };

        let nr_constraints = problem.nr_constraints();
        let has_phase_one_row = nr_artificial > 0;
        let nr_rows = nr_constraints + 1 + usize::from(has_phase_one_row);
        let rhs_column = column_group_end[ColumnType::Artificial];
        let mut matrix = DenseMatrix::zeros(nr_rows, rhs_column + 1);

        let mut next_slack = column_group_end[ColumnType::Normal];
        let mut next_artificial = column_group_end[ColumnType::Slack];
        for (i, (constraint, &relation)) in problem.constraints().iter().zip(&relations).enumerate() {
            for (j, &coefficient) in constraint.coefficients().iter().enumerate() {
                matrix.set_value(i, j, coefficient);
            }
            matrix.set_value(i, rhs_column, constraint.rhs());
            if constraint.rhs() < f64::zero() {
                matrix.multiply_row(i, -f64::one());
            }

            match relation {
                ConstraintRelation::Less => {
                    matrix.set_value(i, next_slack, f64::one());
                    next_slack += 1;
                },
                ConstraintRelation::Greater => {
                    matrix.set_value(i, next_slack, -f64::one());
                    next_slack += 1;
                    matrix.set_value(i, next_artificial, f64::one());
                    next_artificial += 1;
                },
                ConstraintRelation::Equal => {
                    matrix.set_value(i, next_artificial, f64::one());
                    next_artificial += 1;
                },
            }
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);
        debug_assert_eq!(next_artificial, column_group_end[ColumnType::Artificial]);

        for (j, &cost) in problem.cost().iter().enumerate() {
            matrix.set_value(nr_constraints, j, -cost);
        }
        matrix.set_value(nr_constraints, rhs_column, problem.fixed_cost());

        if has_phase_one_row {
            // Negated sum of the rows that have an artificial variable, the artificial columns
            // themselves excluded
            let phase_one_row = nr_constraints + 1;
            for (i, &relation) in relations.iter().enumerate() {
                if relation == ConstraintRelation::Less {
                    continue;
                }
                for j in (0..column_group_end[ColumnType::Slack]).chain([rhs_column]) {
                    let value = matrix.get_value(phase_one_row, j) - matrix.get_value(i, j);
                    matrix.set_value(phase_one_row, j, value);
                }
            }
        }

        Self {
            matrix,
            column_group_end,
            nr_constraints,
            has_phase_one_row,
            tolerance,
        }
    }

    /// Create a tableau from rows that are known to be laid out as this type expects.
    ///
    /// The phase one row is assumed to be present exactly when there are artificial columns.
    #[cfg(test)]
    pub(crate) fn from_test_data(
        rows: Vec<Vec<f64>>,
        nr_normal: usize,
        nr_slack: usize,
        nr_artificial: usize,
    ) -> Self {
        let cumulative = cumsum_array_owned([nr_normal, nr_slack, nr_artificial]);
        let has_phase_one_row = nr_artificial > 0;
        let nr_constraints = rows.len() - 1 - usize::from(has_phase_one_row);

        Self {
            matrix: DenseMatrix::from_data(rows),
            column_group_end: enum_map! {
                ColumnType::Normal     => cumulative[0],
                ColumnType::Slack      => cumulative[1],
                ColumnType::Artificial => cumulative[2],
            },
            nr_constraints,
            has_phase_one_row,
            tolerance: 0.0,
        }
    }

    /// Perform a Gauss-Jordan pivot on the element at (`row`, `column`).
    ///
    /// The pivot row is divided by the pivot element, after which the column is eliminated from
    /// all other rows, cost rows included. Afterwards, the column is a unit column.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_constraints);
        debug_assert!(column < self.nr_columns());

        let pivot_value = self.matrix.get_value(row, column);
        debug_assert!(!self.is_zero(pivot_value));
        self.matrix.divide_row(row, pivot_value);

        for i in (0..self.matrix.nr_rows()).filter(|&i| i != row) {
            let factor = self.matrix.get_value(i, column);
            if factor != f64::zero() {
                self.matrix.mul_add_rows(row, i, -factor);
            }
        }

        debug_assert_eq!(self.matrix.get_value(row, column), f64::one());
        debug_assert!(self.matrix.column(column).enumerate().all(|(i, value)| {
            i == row || value == f64::zero()
        }));
    }

    /// Select a row to pivot on with the minimum ratio test.
    ///
    /// Only constraint rows with a positive entry in `column` are considered. Of those, the row
    /// with the smallest ratio of right-hand side to entry is selected; on ties, the row that
    /// comes first. A row with a zero right-hand side has ratio zero and can leave, so degenerate
    /// pivots are possible.
    ///
    /// # Return value
    ///
    /// `None` if no row has a positive entry in the column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut leaving: Option<(usize, f64)> = None;
        for i in 0..self.nr_constraints {
            let value = self.matrix.get_value(i, column);
            if value > self.tolerance {
                let ratio = self.rhs(i) / value;
                match leaving {
                    Some((_, minimum)) if ratio >= minimum => {},
                    _ => leaving = Some((i, ratio)),
                }
            }
        }

        leaving.map(|(i, _)| i)
    }

    /// Relative cost of a column in the cost row that is currently optimized.
    ///
    /// That is the phase one row while it is present, and the objective row otherwise.
    pub fn relative_cost(&self, column: usize) -> f64 {
        debug_assert!(column < self.nr_columns());

        self.matrix.get_value(self.cost_row(), column)
    }

    /// Right-hand side of the cost row that is currently optimized.
    ///
    /// While the phase one row is present, this is minus the sum of the artificial variables.
    pub fn objective_function_value(&self) -> f64 {
        self.rhs(self.cost_row())
    }

    /// For a column, the row it is basic in.
    ///
    /// A column is basic in a constraint row when its value there is one, and zero in all other
    /// rows, cost rows included.
    pub fn basis_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut basis_row = None;
        for (i, value) in self.matrix.column(column).enumerate() {
            if self.is_zero(value) {
                continue;
            }
            if basis_row.is_none() && i < self.nr_constraints && self.is_one(value) {
                basis_row = Some(i);
            } else {
                return None;
            }
        }

        basis_row
    }

    /// Read the current basic solution from the tableau.
    ///
    /// For each constraint row, the first column that is basic in that row gets the right-hand
    /// side of the row as its value. All other variables are zero.
    pub fn current_bfs(&self) -> BasicSolution {
        debug_assert!(!self.has_phase_one_row);

        let mut values = vec![f64::zero(); self.nr_columns()];
        for i in 0..self.nr_constraints {
            if let Some(column) = (0..self.nr_columns()).find(|&j| self.basis_row(j) == Some(i)) {
                values[column] = self.rhs(i);
            }
        }

        let slack_values = values.split_off(self.column_group_end[ColumnType::Normal]);
        let nr_slack = self.nr_slack_variables();
        BasicSolution::new(
            self.rhs(self.nr_constraints),
            values,
            slack_values.into_iter().take(nr_slack).collect(),
        )
    }

    /// Drive the artificial variables that are still basic out of the basis.
    ///
    /// Should only be called when the phase one objective is zero, such that all basic artificial
    /// variables have value zero. Each of them is replaced by the first non artificial column with
    /// a nonzero value in its row. If no such column exists, the row is a linear combination of
    /// the other rows and it is removed.
    ///
    /// # Return value
    ///
    /// Indices of the removed rows, sorted.
    pub fn remove_artificial_basis_variables(&mut self) -> Vec<usize> {
        debug_assert!(self.has_phase_one_row);

        let mut rows_to_remove = Vec::new();
        for column in self.column_group_end[ColumnType::Slack]..self.nr_columns() {
            if let Some(row) = self.basis_row(column) {
                let replacement = (0..self.column_group_end[ColumnType::Slack])
                    .find(|&j| !self.is_zero(self.matrix.get_value(row, j)));
                match replacement {
                    Some(j) => self.pivot(row, j),
                    None => rows_to_remove.push(row),
                }
            }
        }

        rows_to_remove.sort_unstable();
        self.matrix.remove_rows(&rows_to_remove);
        self.nr_constraints -= rows_to_remove.len();

        rows_to_remove
    }

    /// Remove the phase one row and all artificial columns.
    ///
    /// Afterwards, the objective row is the cost row that is optimized.
    pub fn remove_artificial(&mut self) {
        debug_assert!(self.has_phase_one_row);

        self.matrix.remove_row(self.matrix.nr_rows() - 1);
        self.has_phase_one_row = false;

        let artificial = (self.column_group_end[ColumnType::Slack]..self.nr_columns())
            .collect::<Vec<_>>();
        self.matrix.remove_columns(&artificial);
        self.column_group_end[ColumnType::Artificial] = self.column_group_end[ColumnType::Slack];
    }

    /// Whether a value is treated as negative.
    pub fn is_negative(&self, value: f64) -> bool {
        value < -self.tolerance
    }

    /// Whether a value is treated as zero.
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.tolerance
    }

    fn is_one(&self, value: f64) -> bool {
        (value - f64::one()).abs() <= self.tolerance
    }

    fn rhs(&self, row: usize) -> f64 {
        self.matrix.get_value(row, self.nr_columns())
    }

    fn cost_row(&self) -> usize {
        if self.has_phase_one_row {
            self.nr_constraints + 1
        } else {
            self.nr_constraints
        }
    }

    /// Whether the phase one row is present.
    pub fn has_phase_one_row(&self) -> bool {
        self.has_phase_one_row
    }

    /// Number of columns, the right-hand side excluded.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Number of columns of a group.
    pub fn nr_columns_of_type(&self, column_type: ColumnType) -> usize {
        let start = match column_type {
            ColumnType::Normal => 0,
            ColumnType::Slack => self.column_group_end[ColumnType::Normal],
            ColumnType::Artificial => self.column_group_end[ColumnType::Slack],
        };

        self.column_group_end[column_type] - start
    }

    fn nr_slack_variables(&self) -> usize {
        self.nr_columns_of_type(ColumnType::Slack)
    }

    fn column_name(&self, column: usize) -> String {
        if column < self.column_group_end[ColumnType::Normal] {
            variable_name(column)
        } else if column < self.column_group_end[ColumnType::Slack] {
            format!("s{}", column - self.column_group_end[ColumnType::Normal] + 1)
        } else if column < self.column_group_end[ColumnType::Artificial] {
            format!("a{}", column - self.column_group_end[ColumnType::Slack] + 1)
        } else {
            "b".to_string()
        }
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let header = (0..=self.nr_columns())
            .map(|j| self.column_name(j))
            .collect::<Vec<_>>();
        let rows = (0..self.matrix.nr_rows())
            .map(|i| self.matrix.row(i).map(f64::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = "cost".len();
        let column_width = header.iter().enumerate()
            .map(|(j, name)| {
                rows.iter().map(|row| row[j].len()).fold(name.len(), usize::max)
            })
            .collect::<Vec<_>>();
        let total_width = (row_counter_width + 1) + 1
            + column_width.iter().map(|width| 1 + width).sum::<usize>();
        let separator = repeat_n('-', total_width).collect::<String>();

        // Column names
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        for (name, &width) in header.iter().zip(&column_width) {
            write!(f, " {0:^width$}", name, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", separator)?;

        for (i, row) in rows.iter().enumerate() {
            if i == self.nr_constraints {
                writeln!(f, "{}", separator)?;
            }
            let label = match i {
                i if i < self.nr_constraints => i.to_string(),
                i if i == self.nr_constraints => "cost".to_string(),
                _ => "art".to_string(),
            };
            write!(f, "{0:>width$} |", label, width = row_counter_width)?;
            for (value, &width) in row.iter().zip(&column_width) {
                write!(f, " {0:^width$}", value, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
