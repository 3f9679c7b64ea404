//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs. A problem in general form is what a user
//! describes: variables of any sign restriction, an objective to maximize or minimize and
//! constraints of any relation. It is transformed into a `StandardForm` before it is solved, while
//! remembering how to map a solution of that transformed problem back onto the original variables.
use std::fmt;

use log::{debug, warn};

use crate::algorithm::{BasicSolution, OptimizationResult, SolveOptions};
use crate::algorithm::two_phase;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::data::linear_program::elements::{LinearProgramType, Objective, VariableDomain};
use crate::data::linear_program::function::{variable_name, ConstraintFunction, ObjectiveFunction};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::SolveError;


/// A linear program in general form.
///
/// Instances are created by the `ProblemBuilder`, which guarantees that all functions have one
/// coefficient for each variable. The `is_consistent` method in this module can be viewed as
/// documentation for the requirements on the fields of this data structure.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralForm {
    /// Function to optimize, over the *active* variables.
    objective: ObjectiveFunction,
    /// All constraints, over the *active* variables, in the order in which they were added.
    constraints: Vec<ConstraintFunction>,
    /// Sign restriction of each *active* variable, ordered by index.
    ///
    /// Before the problem is standardized, the active variables are exactly the original variables.
    variables: Vec<VariableDomain>,
    /// For all variables of the problem as it was described, their name and how they relate to the
    /// active variables.
    original_variables: Vec<(String, OriginalVariable)>,
}

/// How a variable of the original problem is represented by the active variables.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum OriginalVariable {
    /// The variable is represented by the active variable at this index.
    Active(usize),
    /// The variable was non positive and has been substituted by `x = -x'`.
    ///
    /// Contains the index of `x'`.
    Flipped(usize),
    /// The variable was free and has been split up in two non negative variables.
    ///
    /// We have `x = x+ - x-` with both `x+ >= 0` and `x- >= 0`. The column of `x-` directly
    /// precedes the column of `x+`.
    ActiveFree {
        /// Index of `x+`.
        positive: usize,
        /// Index of `x-`.
        negative: usize,
    },
}

impl GeneralForm {
    /// Create a new linear program in general form.
    ///
    /// The caller is responsible for the consistency of the arguments; use a `ProblemBuilder` to
    /// get them checked.
    pub(crate) fn new(
        objective: ObjectiveFunction,
        constraints: Vec<ConstraintFunction>,
        variables: Vec<VariableDomain>,
    ) -> Self {
        let original_variables = (0..variables.len())
            .map(|j| (variable_name(j), OriginalVariable::Active(j)))
            .collect();

        let general_form = Self {
            objective,
            constraints,
            variables,
            original_variables,
        };
        debug_assert!(general_form.is_consistent());

        general_form
    }

    /// Bring the problem into standard form.
    ///
    /// Afterwards, all active variables are non negative and the objective is maximized. Applying
    /// this to a problem that is already in standard form changes nothing.
    ///
    /// Note that the objective value of a minimization problem is not negated back when a
    /// solution is reported.
    pub fn standardize(&mut self) {
        self.transform_variables();
        self.make_maximization_problem();

        debug_assert!(self.is_consistent());
        debug_assert!(self.is_standard());
    }

    /// Substitute all variables that are not non negative.
    ///
    /// A non positive variable `x` is replaced by `x' = -x`. A free variable `x` is split up into
    /// `x+ - x-`, the column of `x-` is inserted directly before the column of `x+`.
    fn transform_variables(&mut self) {
        if self.variables.iter().all(|&domain| domain == VariableDomain::NonNegative) {
            return;
        }

        // Index of the column that represents the (positive part of the) old active variable
        let mut new_index = Vec::with_capacity(self.variables.len());
        let mut nr_columns = 0;
        for &domain in &self.variables {
            if domain == VariableDomain::Unrestricted {
                nr_columns += 1;
            }
            new_index.push(nr_columns);
            nr_columns += 1;
        }

        self.objective = ObjectiveFunction::from_parts(
            self.objective.objective(),
            substitute(self.objective.coefficients(), &self.variables),
            self.objective.constant(),
        );
        for constraint in &mut self.constraints {
            *constraint = ConstraintFunction::from_parts(
                constraint.relation(),
                substitute(constraint.coefficients(), &self.variables),
                constraint.rhs(),
            );
        }

        for (_, original) in &mut self.original_variables {
            *original = match *original {
                OriginalVariable::Active(j) => match self.variables[j] {
                    VariableDomain::NonNegative => OriginalVariable::Active(new_index[j]),
                    VariableDomain::NonPositive => OriginalVariable::Flipped(new_index[j]),
                    VariableDomain::Unrestricted => OriginalVariable::ActiveFree {
                        positive: new_index[j],
                        negative: new_index[j] - 1,
                    },
                },
                OriginalVariable::Flipped(j) => OriginalVariable::Flipped(new_index[j]),
                OriginalVariable::ActiveFree { positive, negative } => OriginalVariable::ActiveFree {
                    positive: new_index[positive],
                    negative: new_index[negative],
                },
            };
        }

        debug!(
            "Substituted {} variables by {} non negative variables",
            self.variables.len(), nr_columns,
        );
        self.variables = vec![VariableDomain::NonNegative; nr_columns];
    }

    /// Replace a minimization by the maximization of the negated objective function.
    fn make_maximization_problem(&mut self) {
        if self.objective.objective() == Objective::Minimize {
            self.objective = ObjectiveFunction::from_parts(
                Objective::Maximize,
                self.objective.coefficients().iter().map(|&coefficient| -coefficient).collect(),
                -self.objective.constant(),
            );
        }
    }

    /// Whether all active variables are non negative and the objective is maximized.
    pub fn is_standard(&self) -> bool {
        self.objective.objective() == Objective::Maximize
            && self.variables.iter().all(|&domain| domain == VariableDomain::NonNegative)
    }

    /// Standardize the problem and derive the input of the simplex engine from it.
    pub fn derive_standard_form(&mut self) -> StandardForm {
        self.standardize();

        StandardForm::from_consistent(
            self.objective.coefficients().to_vec(),
            self.objective.constant(),
            self.constraints.clone(),
        )
    }

    /// Express a basic feasible solution of the standardized problem in the original variables.
    ///
    /// # Arguments
    ///
    /// * `bfs`: Solution over the columns of the `StandardForm` derived from this problem.
    ///
    /// # Return value
    ///
    /// Values of `x1, x2, ...` followed by the slack values `s1, s2, ...`.
    pub(crate) fn reconstruct_solution(&self, bfs: &BasicSolution) -> Solution {
        debug_assert_eq!(bfs.variable_values().len(), self.variables.len());

        let values = bfs.variable_values();
        let solution_values = self.original_variables.iter()
            .map(|(name, original)| {
                let value = match *original {
                    OriginalVariable::Active(j) => values[j],
                    OriginalVariable::Flipped(j) => 0.0 - values[j],
                    OriginalVariable::ActiveFree { positive, negative } => {
                        values[positive] - values[negative]
                    },
                };
                (name.clone(), value)
            })
            .chain(bfs.slack_values().iter()
                .enumerate()
                .map(|(i, &value)| (format!("s{}", i + 1), value)))
            .collect();

        Solution::new(bfs.objective_value(), solution_values)
    }

    /// Solve with the default pivot rule and options.
    pub fn solve(&self) -> Result<LinearProgramType, SolveError> {
        self.solve_with::<SteepestDescentAlongVariable>(&SolveOptions::default())
    }

    /// Solve this linear program using the two phase simplex method.
    ///
    /// The problem itself is not modified; a standardized copy is solved.
    ///
    /// # Return value
    ///
    /// Either an optimal solution, or `Infeasible`. An unbounded problem is also reported as
    /// `Infeasible`.
    ///
    /// # Errors
    ///
    /// If the solve was aborted, see `SolveError`.
    pub fn solve_with<PR: PivotRule>(
        &self,
        options: &SolveOptions,
    ) -> Result<LinearProgramType, SolveError> {
        let mut problem = self.clone();
        let standard_form = problem.derive_standard_form();

        Ok(match two_phase::solve::<PR>(&standard_form, options)? {
            OptimizationResult::FiniteOptimum(bfs) => {
                LinearProgramType::FiniteOptimum(problem.reconstruct_solution(&bfs))
            },
            OptimizationResult::Infeasible => LinearProgramType::Infeasible,
            OptimizationResult::Unbounded => {
                warn!("Problem is unbounded, reporting it as not feasible");
                LinearProgramType::Infeasible
            },
        })
    }

    /// Function to optimize.
    pub fn objective(&self) -> &ObjectiveFunction {
        &self.objective
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[ConstraintFunction] {
        &self.constraints
    }

    /// Sign restrictions of the active variables.
    pub fn domains(&self) -> &[VariableDomain] {
        &self.variables
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of variables the functions are currently defined over.
    ///
    /// This grows by one for each free variable when the problem is standardized.
    pub fn nr_active_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of variables of the problem as it was described.
    pub fn nr_original_variables(&self) -> usize {
        self.original_variables.len()
    }

    /// Check whether the dimensions of the problem are consistent.
    fn is_consistent(&self) -> bool {
        let nr_active = self.variables.len();

        self.objective.nr_variables() == nr_active
            && self.constraints.iter().all(|constraint| constraint.nr_variables() == nr_active)
            && self.original_variables.iter().all(|(_, original)| match *original {
                OriginalVariable::Active(j) | OriginalVariable::Flipped(j) => j < nr_active,
                OriginalVariable::ActiveFree { positive, negative } => {
                    positive < nr_active && negative < nr_active && positive != negative
                },
            })
    }
}

/// Coefficients of a function after substituting all variables that are not non negative.
fn substitute(coefficients: &[f64], domains: &[VariableDomain]) -> Vec<f64> {
    debug_assert_eq!(coefficients.len(), domains.len());

    let mut substituted = Vec::with_capacity(coefficients.len());
    for (&coefficient, &domain) in coefficients.iter().zip(domains) {
        match domain {
            VariableDomain::NonNegative => substituted.push(coefficient),
            VariableDomain::NonPositive => substituted.push(-coefficient),
            VariableDomain::Unrestricted => {
                substituted.push(-coefficient);
                substituted.push(coefficient);
            },
        }
    }

    substituted
}

impl fmt::Display for GeneralForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.objective)?;
        writeln!(f, "/")?;
        for constraint in &self.constraints {
            writeln!(f, "{}", constraint)?;
        }
        writeln!(f, "--------")?;
        for (j, domain) in self.variables.iter().enumerate() {
            let name = variable_name(j);
            match domain {
                VariableDomain::NonNegative => writeln!(f, "{} >= 0", name)?,
                VariableDomain::NonPositive => writeln!(f, "{} <= 0", name)?,
                VariableDomain::Unrestricted => writeln!(f, "{} in R", name)?,
            }
        }

        Ok(())
    }
}
