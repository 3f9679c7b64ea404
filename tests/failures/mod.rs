//! # Malformed descriptions and aborted solves
use tabular_simplex::algorithm::SolveOptions;
use tabular_simplex::algorithm::two_phase::Phase;
use tabular_simplex::algorithm::two_phase::strategy::pivot_rule::SteepestDescentAlongVariable;
use tabular_simplex::data::linear_program::builder::ProblemBuilder;
use tabular_simplex::data::linear_program::elements::{ConstraintRelation, Objective, VariableDomain};
use tabular_simplex::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
use tabular_simplex::data::linear_program::general_form::GeneralForm;
use tabular_simplex::error::{Error, SolveError, ValidationError};

use crate::{init_logging, problem};

fn describe(nr_constraints: usize) -> Result<GeneralForm, Error> {
    let mut builder = ProblemBuilder::default()
        .set_number_of_variables(2, [VariableDomain::NonNegative; 2])?
        .set_objective_function(ObjectiveFunction::new(Objective::Maximize, [1.0, 1.0, 0.0]))?;
    for _ in 0..nr_constraints {
        builder = builder.add_constraint(ConstraintFunction::new(ConstraintRelation::Less, [1.0, 1.0, 1.0]))?;
    }

    Ok(builder.build()?)
}

#[test]
fn validation() {
    assert!(describe(2).is_ok());
    assert_eq!(describe(0), Err(Error::Validation(ValidationError::NoConstraints)));

    let result = ProblemBuilder::default()
        .set_number_of_variables(2, [VariableDomain::NonNegative; 2])
        .and_then(|builder| builder.add_constraint(
            ConstraintFunction::new(ConstraintRelation::Less, [1.0, 1.0, 1.0]),
        ))
        .and_then(|builder| builder.add_constraint(
            ConstraintFunction::new(ConstraintRelation::Less, [1.0, 1.0, 1.0, 1.0]),
        ));
    let error = result.unwrap_err();
    assert_eq!(error, ValidationError::ConstraintArityMismatch { index: 1, expected: 2, actual: 3 });
    assert_eq!(error.to_string(), "constraint 1 has 3 variable coefficients, expected 2");

    assert_eq!(
        ProblemBuilder::default()
            .set_objective_function(ObjectiveFunction::new(Objective::Minimize, [1.0]))
            .unwrap_err(),
        ValidationError::VariableCountNotSet,
    );
}

#[test]
fn iteration_limit() {
    init_logging();

    let general = problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Less, vec![1.0, 2.0, 24.0]),
            (ConstraintRelation::Equal, vec![1.0, 0.0, 2.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    );

    let options = SolveOptions::default().with_max_iterations(Some(0));
    let error = general.solve_with::<SteepestDescentAlongVariable>(&options).unwrap_err();
    assert_eq!(error, SolveError::IterationLimitExceeded { phase: Phase::One, limit: 0 });
    assert_eq!(Error::from(error).to_string(), "phase one did not terminate within 0 pivots");

    // One pivot in each phase
    let options = SolveOptions::default().with_max_iterations(Some(1));
    assert!(general.solve_with::<SteepestDescentAlongVariable>(&options).is_ok());
    let options = SolveOptions::default().with_max_iterations(None);
    assert!(general.solve_with::<SteepestDescentAlongVariable>(&options).is_ok());
}
