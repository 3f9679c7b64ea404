//! # Building linear programs
//!
//! A linear program is described step by step. Each step validates its input immediately, such that
//! a malformed description fails at the call that introduces the problem.
use crate::data::linear_program::elements::VariableDomain;
use crate::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
use crate::data::linear_program::general_form::GeneralForm;
use crate::error::ValidationError;

/// Staged construction of a `GeneralForm`.
///
/// # Example
///
/// ```
/// use tabular_simplex::data::linear_program::builder::ProblemBuilder;
/// use tabular_simplex::data::linear_program::elements::{ConstraintRelation, Objective, VariableDomain};
/// use tabular_simplex::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
///
/// let problem = ProblemBuilder::default()
///     .set_number_of_variables(2, [VariableDomain::NonNegative; 2])?
///     .set_objective_function(ObjectiveFunction::new(Objective::Maximize, [1.0, 1.0, 0.0]))?
///     .add_constraint(ConstraintFunction::new(ConstraintRelation::Less, [1.0, 2.0, 24.0]))?
///     .add_constraint(ConstraintFunction::new(ConstraintRelation::Equal, [1.0, 0.0, 2.0]))?
///     .build()?;
/// assert_eq!(problem.nr_constraints(), 2);
/// # Ok::<(), tabular_simplex::error::ValidationError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct ProblemBuilder {
    /// One domain per variable, `None` until the number of variables is set.
    domains: Option<Vec<VariableDomain>>,
    objective: Option<ObjectiveFunction>,
    constraints: Vec<ConstraintFunction>,
    standardize: bool,
}

impl ProblemBuilder {
    /// Set the number of variables and their domains.
    ///
    /// # Errors
    ///
    /// When the number of variables was already set, is zero, or doesn't match the number of
    /// domains.
    pub fn set_number_of_variables(
        mut self,
        nr_variables: usize,
        domains: impl IntoIterator<Item = VariableDomain>,
    ) -> Result<Self, ValidationError> {
        if self.domains.is_some() {
            return Err(ValidationError::VariableCountAlreadySet);
        }
        if nr_variables == 0 {
            return Err(ValidationError::NonPositiveVariableCount);
        }
        let domains = domains.into_iter().collect::<Vec<_>>();
        if domains.len() != nr_variables {
            return Err(ValidationError::DomainCountMismatch {
                expected: nr_variables,
                actual: domains.len(),
            });
        }

        self.domains = Some(domains);
        Ok(self)
    }

    /// Set the function to optimize, replacing any that was set before.
    ///
    /// # Errors
    ///
    /// When the number of variables is not yet known, or the function doesn't have a coefficient
    /// for each variable.
    pub fn set_objective_function(
        mut self,
        objective: ObjectiveFunction,
    ) -> Result<Self, ValidationError> {
        let nr_variables = self.nr_variables()?;
        if objective.nr_variables() != nr_variables {
            return Err(ValidationError::ObjectiveArityMismatch {
                expected: nr_variables,
                actual: objective.nr_variables(),
            });
        }

        self.objective = Some(objective);
        Ok(self)
    }

    /// Add a constraint after the ones that were already added.
    ///
    /// # Errors
    ///
    /// When the number of variables is not yet known, or the constraint doesn't have a coefficient
    /// for each variable.
    pub fn add_constraint(
        mut self,
        constraint: ConstraintFunction,
    ) -> Result<Self, ValidationError> {
        let nr_variables = self.nr_variables()?;
        if constraint.nr_variables() != nr_variables {
            return Err(ValidationError::ConstraintArityMismatch {
                index: self.constraints.len(),
                expected: nr_variables,
                actual: constraint.nr_variables(),
            });
        }

        self.constraints.push(constraint);
        Ok(self)
    }

    /// Request the problem to be brought into standard form when it is built.
    ///
    /// Requesting this more than once has the same effect as requesting it once.
    #[must_use]
    pub fn set_to_standard_form(mut self) -> Self {
        self.standardize = true;
        self
    }

    /// Finish the description.
    ///
    /// # Errors
    ///
    /// When the number of variables, the objective function or any constraint is missing.
    pub fn build(self) -> Result<GeneralForm, ValidationError> {
        let domains = self.domains.ok_or(ValidationError::VariableCountNotSet)?;
        if domains.is_empty() {
            return Err(ValidationError::NonPositiveVariableCount);
        }
        let objective = self.objective.ok_or(ValidationError::MissingObjective)?;
        if self.constraints.is_empty() {
            return Err(ValidationError::NoConstraints);
        }

        let mut general_form = GeneralForm::new(objective, self.constraints, domains);
        if self.standardize {
            general_form.standardize();
        }

        Ok(general_form)
    }

    fn nr_variables(&self) -> Result<usize, ValidationError> {
        self.domains.as_ref()
            .map(Vec::len)
            .ok_or(ValidationError::VariableCountNotSet)
    }
}
