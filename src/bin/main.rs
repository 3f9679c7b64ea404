use std::process::exit;

use clap::Parser;
use log::LevelFilter;

use tabular_simplex::algorithm::SolveOptions;
use tabular_simplex::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use tabular_simplex::data::linear_program::builder::ProblemBuilder;
use tabular_simplex::data::linear_program::elements::{ConstraintRelation, Objective, VariableDomain};
use tabular_simplex::data::linear_program::function::{ConstraintFunction, ObjectiveFunction};
use tabular_simplex::data::linear_program::general_form::GeneralForm;
use tabular_simplex::error::Error;

/// Solve a small linear program with the two phase tableau simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Increase logging output, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Values with an absolute value up to this one are treated as zero
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,
    /// Maximum number of pivots per phase
    #[arg(long, default_value_t = SolveOptions::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Enter the first column with a negative relative cost instead of the most negative one
    #[arg(long)]
    first_profitable: bool,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(error) = run(&opts) {
        eprintln!("{}", error);
        exit(1);
    }
}

fn run(opts: &Opts) -> Result<(), Error> {
    let problem = problem()?;
    println!("{}", problem);

    let options = SolveOptions::default()
        .with_tolerance(opts.tolerance)
        .with_max_iterations(Some(opts.max_iterations));

    println!("Solving...");
    let result = if opts.first_profitable {
        problem.solve_with::<FirstProfitable>(&options)?
    } else {
        problem.solve_with::<SteepestDescentAlongVariable>(&options)?
    };
    println!("{}", result);

    Ok(())
}

/// max x1 + x2 s.t. x1 + 2 x2 <= 24, x1 = 2, x1, x2 >= 0
fn problem() -> Result<GeneralForm, Error> {
    let problem = ProblemBuilder::default()
        .set_number_of_variables(2, [VariableDomain::NonNegative; 2])?
        .set_objective_function(ObjectiveFunction::new(Objective::Maximize, [1.0, 1.0, 0.0]))?
        .add_constraint(ConstraintFunction::new(ConstraintRelation::Less, [1.0, 2.0, 24.0]))?
        .add_constraint(ConstraintFunction::new(ConstraintRelation::Equal, [1.0, 0.0, 2.0]))?
        .build()?;

    Ok(problem)
}
