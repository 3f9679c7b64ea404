//! # Problems that are not in standard form
//!
//! Minimization problems and variables that are not non negative are transformed before solving,
//! after which the solution is expressed in the original variables again.
use approx::assert_abs_diff_eq;

use tabular_simplex::data::linear_program::builder::ProblemBuilder;
use tabular_simplex::data::linear_program::elements::{ConstraintRelation, Objective, VariableDomain};
use tabular_simplex::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
use tabular_simplex::data::linear_program::solution::Solution;

use crate::{init_logging, optimum, problem};

#[test]
fn unrestricted_variable() {
    init_logging();

    let general = problem(
        (Objective::Maximize, vec![-1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Less, vec![-1.0, 0.0, 3.0]),
            (ConstraintRelation::Less, vec![0.0, 1.0, 4.0]),
        ],
        vec![VariableDomain::Unrestricted, VariableDomain::NonNegative],
    );
    let solution = optimum(general.solve().unwrap());

    assert_eq!(solution, Solution::new(7.0, vec![
        ("x1".to_string(), -3.0),
        ("x2".to_string(), 4.0),
        ("s1".to_string(), 0.0),
        ("s2".to_string(), 0.0),
    ]));
    // The problem that was solved is a copy
    assert_eq!(general.nr_active_variables(), 2);
}

#[test]
fn minimization() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Minimize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Greater, vec![1.0, 1.0, 2.0]),
            (ConstraintRelation::Less, vec![1.0, 0.0, 5.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    ).solve().unwrap());

    // The value of the maximized, negated objective
    assert_abs_diff_eq!(solution.objective_value(), -2.0);
    assert_eq!(solution.value("x1"), Some(2.0));
    assert_eq!(solution.value("x2"), Some(0.0));
    assert_eq!(solution.value("s1"), Some(0.0));
    assert_eq!(solution.value("s2"), Some(3.0));
}

#[test]
fn non_positive_variable() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Maximize, vec![-1.0, 0.0]),
        vec![(ConstraintRelation::Greater, vec![1.0, -4.0])],
        vec![VariableDomain::NonPositive],
    ).solve().unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 4.0);
    assert_eq!(solution.value("x1"), Some(-4.0));
    assert_eq!(solution.value("s1"), Some(0.0));
}

#[test]
fn standard_form_on_build() {
    init_logging();

    let general = ProblemBuilder::default()
        .set_number_of_variables(2, [VariableDomain::Unrestricted, VariableDomain::NonPositive])
        .and_then(|builder| builder.set_objective_function(
            ObjectiveFunction::new(Objective::Minimize, [1.0, -1.0, 0.0]),
        ))
        .and_then(|builder| builder.add_constraint(
            ConstraintFunction::new(ConstraintRelation::Less, [1.0, 1.0, 5.0]),
        ))
        .map(ProblemBuilder::set_to_standard_form)
        .and_then(ProblemBuilder::build)
        .unwrap();

    assert!(general.is_standard());
    assert_eq!(general.nr_active_variables(), 3);
    assert_eq!(general.nr_original_variables(), 2);
    assert_eq!(general.domains(), &[VariableDomain::NonNegative; 3]);
    assert_eq!(general.objective().values(), &[1.0, -1.0, -1.0, -0.0]);
    assert_eq!(general.constraints()[0].values(), &[-1.0, 1.0, -1.0, 5.0]);
}
