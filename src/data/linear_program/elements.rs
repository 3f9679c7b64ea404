//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use crate::data::linear_program::solution::Solution;

/// A `ConstraintRelation` is a type of (in)equality.
///
/// These are read "from the coefficients to the right-hand side", so `Less` means `<a, x> <= b`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintRelation {
    /// `<a, x> == b`
    Equal,
    /// `<a, x> <= b`
    Less,
    /// `<a, x> >= b`
    Greater,
}

/// The relation that holds after multiplying both sides by `-1`.
impl Not for ConstraintRelation {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Equal => Self::Equal,
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
        }
    }
}

impl fmt::Display for ConstraintRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "=",
            Self::Less => "<=",
            Self::Greater => ">=",
        })
    }
}

/// Sign restriction of a decision variable.
///
/// After a problem is brought into standard form, every active variable is `NonNegative`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariableDomain {
    /// `x >= 0`
    NonNegative,
    /// `x <= 0`
    NonPositive,
    /// `x` is free.
    Unrestricted,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Maximize
    }
}

/// Outcome of solving a linear program.
///
/// # Note
///
/// An unbounded problem is reported as `Infeasible` as well. The engine does tell the two apart
/// (see `algorithm::OptimizationResult`) and logs the actual cause.
#[derive(Debug, PartialEq)]
pub enum LinearProgramType {
    /// An optimal solution was found.
    FiniteOptimum(Solution),
    /// No optimal solution exists.
    Infeasible,
}

impl LinearProgramType {
    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::FiniteOptimum(solution) => Some(solution),
            Self::Infeasible => None,
        }
    }

    /// Whether no optimal solution exists.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }
}

impl fmt::Display for LinearProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FiniteOptimum(solution) => solution.fmt(f),
            Self::Infeasible => f.write_str("Problem is not feasible."),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintRelation, LinearProgramType};

    #[test]
    fn negate_relation() {
        assert_eq!(!ConstraintRelation::Less, ConstraintRelation::Greater);
        assert_eq!(!ConstraintRelation::Greater, ConstraintRelation::Less);
        assert_eq!(!ConstraintRelation::Equal, ConstraintRelation::Equal);
    }

    #[test]
    fn infeasible_message() {
        let result = LinearProgramType::Infeasible;
        assert!(result.is_infeasible());
        assert!(result.solution().is_none());
        assert_eq!(result.to_string(), "Problem is not feasible.");
    }
}
