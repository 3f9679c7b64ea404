//! # Linear programs in standard form
//!
//! The form the simplex engine consumes: all variables are non negative and the objective is
//! maximized.
use crate::data::linear_program::function::ConstraintFunction;
use crate::error::ValidationError;

/// A linear program in `StandardForm` is like a linear program in `GeneralForm`, but all of its
/// variables are non negative and the objective function is maximized.
///
/// Constraints may still be of any `ConstraintRelation` and have a right-hand side of any sign;
/// slack and artificial variables are only introduced when a tableau is built.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm {
    /// Coefficients of the function to maximize.
    cost: Vec<f64>,
    /// Constant term of the function to maximize.
    fixed_cost: f64,
    /// Constraints in the order in which they become tableau rows.
    constraints: Vec<ConstraintFunction>,
}

impl StandardForm {
    /// Create a new linear program in standard form.
    ///
    /// # Arguments
    ///
    /// * `cost`: Coefficients of the function to maximize, one per variable.
    /// * `fixed_cost`: Constant added to the objective value.
    /// * `constraints`: Constraints over the same variables.
    ///
    /// # Errors
    ///
    /// When there are no variables, no constraints, or a constraint that doesn't have one
    /// coefficient for each variable.
    pub fn new(
        cost: Vec<f64>,
        fixed_cost: f64,
        constraints: Vec<ConstraintFunction>,
    ) -> Result<Self, ValidationError> {
        if cost.is_empty() {
            return Err(ValidationError::NonPositiveVariableCount);
        }
        if constraints.is_empty() {
            return Err(ValidationError::NoConstraints);
        }
        if let Some((row, constraint)) = constraints.iter()
            .enumerate()
            .find(|(_, constraint)| constraint.nr_variables() != cost.len()) {
            return Err(ValidationError::StandardFormArityMismatch {
                row,
                expected: cost.len(),
                actual: constraint.nr_variables(),
            });
        }

        Ok(Self { cost, fixed_cost, constraints })
    }

    /// Create a new linear program in standard form from data that is known to be consistent.
    pub(crate) fn from_consistent(
        cost: Vec<f64>,
        fixed_cost: f64,
        constraints: Vec<ConstraintFunction>,
    ) -> Self {
        debug_assert!(!cost.is_empty());
        debug_assert!(constraints.iter().all(|constraint| constraint.nr_variables() == cost.len()));

        Self { cost, fixed_cost, constraints }
    }

    /// Coefficients of the function to maximize.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Constant term of the function to maximize.
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// All constraints, in order.
    pub fn constraints(&self) -> &[ConstraintFunction] {
        &self.constraints
    }

    /// Number of (non negative) variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}
