//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use tabular_simplex::data::linear_program::builder::ProblemBuilder;
use tabular_simplex::data::linear_program::elements::{ConstraintRelation, LinearProgramType, Objective, VariableDomain};
use tabular_simplex::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
use tabular_simplex::data::linear_program::general_form::GeneralForm;
use tabular_simplex::data::linear_program::solution::Solution;

mod textbook;
mod transformations;
mod failures;

/// Show the solver's log output when a test fails.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Describe a problem in a single call.
///
/// # Arguments
///
/// * `objective`: Direction and coefficients, followed by the constant.
/// * `constraints`: Relations with coefficients, followed by the right-hand side.
/// * `domains`: One for each variable.
fn problem(
    objective: (Objective, Vec<f64>),
    constraints: Vec<(ConstraintRelation, Vec<f64>)>,
    domains: Vec<VariableDomain>,
) -> GeneralForm {
    let mut builder = ProblemBuilder::default()
        .set_number_of_variables(domains.len(), domains)
        .and_then(|builder| builder.set_objective_function(ObjectiveFunction::new(objective.0, objective.1)))
        .unwrap();
    for (relation, values) in constraints {
        builder = builder.add_constraint(ConstraintFunction::new(relation, values)).unwrap();
    }

    builder.build().unwrap()
}

/// Unpack a solve that should have resulted in an optimal solution.
fn optimum(result: LinearProgramType) -> Solution {
    match result {
        LinearProgramType::FiniteOptimum(solution) => solution,
        LinearProgramType::Infeasible => panic!("expected a finite optimum"),
    }
}
