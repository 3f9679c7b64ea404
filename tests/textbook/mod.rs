//! # Small problems with a known optimum
use approx::assert_abs_diff_eq;

use tabular_simplex::algorithm::SolveOptions;
use tabular_simplex::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use tabular_simplex::data::linear_program::elements::{ConstraintRelation, LinearProgramType, Objective, VariableDomain};
use tabular_simplex::data::linear_program::general_form::GeneralForm;
use tabular_simplex::data::linear_program::solution::Solution;

use crate::{init_logging, optimum, problem};

fn equality_constraint() -> GeneralForm {
    problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Less, vec![1.0, 2.0, 24.0]),
            (ConstraintRelation::Equal, vec![1.0, 0.0, 2.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    )
}

fn only_slacks() -> GeneralForm {
    problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Less, vec![1.0, 1.0, 10.0]),
            (ConstraintRelation::Less, vec![1.0, 0.0, 6.0]),
            (ConstraintRelation::Less, vec![0.0, 1.0, 8.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    )
}

#[test]
fn with_equality_constraint() {
    init_logging();

    let solution = optimum(equality_constraint().solve().unwrap());
    assert_eq!(solution, Solution::new(13.0, vec![
        ("x1".to_string(), 2.0),
        ("x2".to_string(), 11.0),
        ("s1".to_string(), 0.0),
    ]));
}

#[test]
fn with_only_slack_variables() {
    init_logging();

    let options = SolveOptions::default();
    for result in [
        only_slacks().solve_with::<SteepestDescentAlongVariable>(&options),
        only_slacks().solve_with::<FirstProfitable>(&options),
    ] {
        let solution = optimum(result.unwrap());
        assert_abs_diff_eq!(solution.objective_value(), 10.0);
        assert_eq!(solution.value("x1"), Some(6.0));
        assert_eq!(solution.value("x2"), Some(4.0));
        assert_eq!(solution.value("s3"), Some(4.0));
    }
}

#[test]
fn infeasible() {
    init_logging();

    let result = problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Less, vec![1.0, 1.0, 2.0]),
            (ConstraintRelation::Greater, vec![1.0, 1.0, 5.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    ).solve();

    assert_eq!(result, Ok(LinearProgramType::Infeasible));
}

#[test]
fn unbounded_is_reported_as_infeasible() {
    init_logging();

    let result = problem(
        (Objective::Maximize, vec![1.0, 0.0, 0.0]),
        vec![(ConstraintRelation::Less, vec![1.0, -1.0, 1.0])],
        vec![VariableDomain::NonNegative; 2],
    ).solve();

    assert!(result.unwrap().is_infeasible());
}

#[test]
fn degenerate() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![
            (ConstraintRelation::Equal, vec![1.0, -1.0, 0.0]),
            (ConstraintRelation::Less, vec![1.0, 1.0, 4.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    ).solve().unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 4.0);
    assert_eq!(solution.value("x1"), Some(2.0));
    assert_eq!(solution.value("x2"), Some(2.0));
    assert_eq!(solution.value("s1"), Some(0.0));
}

#[test]
fn redundant_constraint() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Maximize, vec![1.0, 2.0, 0.0]),
        vec![
            (ConstraintRelation::Equal, vec![1.0, 1.0, 2.0]),
            (ConstraintRelation::Equal, vec![1.0, 1.0, 2.0]),
        ],
        vec![VariableDomain::NonNegative; 2],
    ).solve().unwrap());

    assert_eq!(solution, Solution::new(4.0, vec![
        ("x1".to_string(), 0.0),
        ("x2".to_string(), 2.0),
    ]));
}

#[test]
fn negative_right_hand_side_equality() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Maximize, vec![-1.0, -1.0, 0.0]),
        vec![(ConstraintRelation::Equal, vec![1.0, -1.0, -3.0])],
        vec![VariableDomain::NonNegative; 2],
    ).solve().unwrap());

    assert_abs_diff_eq!(solution.objective_value(), -3.0);
    assert_eq!(solution.value("x1"), Some(0.0));
    assert_eq!(solution.value("x2"), Some(3.0));
}

#[test]
fn negative_right_hand_side_greater() {
    init_logging();

    // -x1 - x2 >= -4 is x1 + x2 <= 4
    let solution = optimum(problem(
        (Objective::Maximize, vec![1.0, 1.0, 0.0]),
        vec![(ConstraintRelation::Greater, vec![-1.0, -1.0, -4.0])],
        vec![VariableDomain::NonNegative; 2],
    ).solve().unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 4.0);
    assert_eq!(solution.value("x1"), Some(4.0));
    assert_eq!(solution.value("x2"), Some(0.0));
    assert_eq!(solution.value("s1"), Some(0.0));
}

#[test]
fn objective_constant() {
    init_logging();

    let solution = optimum(problem(
        (Objective::Maximize, vec![1.0, -3.5]),
        vec![(ConstraintRelation::Less, vec![2.0, 3.0])],
        vec![VariableDomain::NonNegative],
    ).solve().unwrap());

    assert_abs_diff_eq!(solution.objective_value(), -2.0);
    assert_abs_diff_eq!(solution.value("x1").unwrap(), 1.5);
}

#[test]
fn display() {
    let problem = equality_constraint();
    assert_eq!(problem.to_string(), "\
max z = (1x1) + (1x2) + 0
/
(1x1) + (2x2) <= 24
(1x1) + (0x2) = 2
--------
x1 >= 0
x2 >= 0
");

    let result = problem.solve().unwrap();
    assert_eq!(result.to_string(), "Optimum: 13\nx1 = 2\nx2 = 11\ns1 = 0\n");
}
