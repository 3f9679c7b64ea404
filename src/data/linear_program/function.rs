//! # Objective and constraint functions
//!
//! Both are stored the way they are written down by a user: a coefficient per variable, followed
//! by one trailing constant. For the objective that constant is added to the objective value, for
//! a constraint it is the right-hand side.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_program::elements::{ConstraintRelation, Objective};

/// Name of the `j`-th (zero based) decision variable.
pub(crate) fn variable_name(j: usize) -> String {
    format!("x{}", j + 1)
}

/// Render `(c1x1) + (c2x2) + ...`.
fn format_terms(coefficients: &[f64]) -> String {
    coefficients.iter()
        .enumerate()
        .map(|(j, coefficient)| format!("({}{})", coefficient, variable_name(j)))
        .join(" + ")
}

/// Function to optimize.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveFunction {
    objective: Objective,
    /// Coefficients followed by the constant term.
    values: Vec<f64>,
}

impl ObjectiveFunction {
    /// Create a new objective function.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to maximize or minimize.
    /// * `values`: One coefficient per variable, followed by a constant that is added to the
    /// objective value.
    pub fn new(objective: Objective, values: impl Into<Vec<f64>>) -> Self {
        Self { objective, values: values.into() }
    }

    pub(crate) fn from_parts(objective: Objective, mut coefficients: Vec<f64>, constant: f64) -> Self {
        coefficients.push(constant);
        Self { objective, values: coefficients }
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// All values, the constant included as the last element.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Coefficients of the variables, the constant excluded.
    pub fn coefficients(&self) -> &[f64] {
        &self.values[..self.nr_variables()]
    }

    /// The constant term.
    pub fn constant(&self) -> f64 {
        self.values.last().copied().unwrap_or_else(f64::zero)
    }

    /// Number of variables this function is defined over.
    pub fn nr_variables(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

impl fmt::Display for ObjectiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.objective {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        };
        write!(f, "{} z = ", direction)?;
        if self.nr_variables() > 0 {
            write!(f, "{} + ", format_terms(self.coefficients()))?;
        }
        write!(f, "{}", self.constant())
    }
}

/// A single linear (in)equality.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintFunction {
    relation: ConstraintRelation,
    /// Coefficients followed by the right-hand side.
    values: Vec<f64>,
}

impl ConstraintFunction {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `relation`: How the left-hand side relates to the right-hand side.
    /// * `values`: One coefficient per variable, followed by the right-hand side.
    pub fn new(relation: ConstraintRelation, values: impl Into<Vec<f64>>) -> Self {
        Self { relation, values: values.into() }
    }

    pub(crate) fn from_parts(relation: ConstraintRelation, mut coefficients: Vec<f64>, rhs: f64) -> Self {
        coefficients.push(rhs);
        Self { relation, values: coefficients }
    }

    /// Type of (in)equality.
    pub fn relation(&self) -> ConstraintRelation {
        self.relation
    }

    /// All values, the right-hand side included as the last element.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Coefficients of the variables, the right-hand side excluded.
    pub fn coefficients(&self) -> &[f64] {
        &self.values[..self.nr_variables()]
    }

    /// The right-hand side.
    pub fn rhs(&self) -> f64 {
        self.values.last().copied().unwrap_or_else(f64::zero)
    }

    /// Number of variables this function is defined over.
    pub fn nr_variables(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

impl fmt::Display for ConstraintFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", format_terms(self.coefficients()), self.relation, self.rhs())
    }
}
