//! # Error reporting
//!
//! Two kinds of failure exist. A `ValidationError` is raised while a problem is described and
//! means the description itself is malformed. A `SolveError` aborts a solve that was started on a
//! well formed problem; it never describes a property of the linear program.
//!
//! An infeasible problem is not an error, see `LinearProgramType::Infeasible`.
use thiserror::Error;

use crate::algorithm::two_phase::Phase;

/// A problem description violates one of the construction rules.
///
/// These are reported at the call that violates the rule and are never retried.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// `set_number_of_variables` was called a second time.
    #[error("the number of variables has already been set")]
    VariableCountAlreadySet,
    /// The number of variables has to be strictly positive.
    #[error("the number of variables should be positive (> 0)")]
    NonPositiveVariableCount,
    /// Each variable needs exactly one domain.
    #[error("expected one domain per variable ({expected}), got {actual} domains")]
    DomainCountMismatch {
        /// Number of variables.
        expected: usize,
        /// Number of domains supplied.
        actual: usize,
    },
    /// An objective or constraint was supplied before the number of variables was known.
    #[error("the number of variables has not been set")]
    VariableCountNotSet,
    /// The objective function has a different number of coefficients than there are variables.
    #[error("objective function has {actual} variable coefficients, expected {expected}")]
    ObjectiveArityMismatch {
        /// Number of variables.
        expected: usize,
        /// Number of coefficients in the objective, constant excluded.
        actual: usize,
    },
    /// A constraint has a different number of coefficients than there are variables.
    #[error("constraint {index} has {actual} variable coefficients, expected {expected}")]
    ConstraintArityMismatch {
        /// Position of the constraint in insertion order.
        index: usize,
        /// Number of variables.
        expected: usize,
        /// Number of coefficients in the constraint, right-hand side excluded.
        actual: usize,
    },
    /// No objective function was provided.
    #[error("no objective function provided")]
    MissingObjective,
    /// At least one constraint is needed.
    #[error("no constraints provided")]
    NoConstraints,
    /// Canonical problem data handed directly to `StandardForm::new` is inconsistent.
    #[error("standard form row {row} has {actual} variable coefficients, expected {expected}")]
    StandardFormArityMismatch {
        /// Constraint index.
        row: usize,
        /// Number of cost coefficients.
        expected: usize,
        /// Number of coefficients in the row, right-hand side excluded.
        actual: usize,
    },
}

/// A solve was aborted.
///
/// No partial result is available when this is returned.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum SolveError {
    /// While minimizing the sum of the artificial variables, a column with negative cost has no
    /// row to pivot on.
    ///
    /// The artificial cost is bounded below by zero, so this indicates a tableau that was built
    /// incorrectly.
    #[error("no leaving row for entering column {column} in phase one")]
    NoLeavingRow {
        /// The entering column index.
        column: usize,
    },
    /// A phase did not reach optimality within the configured number of pivots.
    #[error("{phase} did not terminate within {limit} pivots")]
    IterationLimitExceeded {
        /// The phase that was running.
        phase: Phase,
        /// The configured limit.
        limit: usize,
    },
}

/// Any failure this crate can report.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum Error {
    #[allow(missing_docs)]
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[allow(missing_docs)]
    #[error(transparent)]
    Solve(#[from] SolveError),
}
