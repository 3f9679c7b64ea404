//! # Representation of optimal solutions
//!
//! Once a linear program is solved, a solution is derived in terms of the variables of the
//! problem as it was described: variables that were split up or negated to reach standard form are
//! combined again.
use std::fmt;

/// Represents a full solution to a linear program.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(PartialEq, Debug, Clone)]
pub struct Solution {
    /// Value of the objective function for this solution, including any constant that was
    /// included in the original problem.
    ///
    /// For a minimization problem, this is the optimal value of the negated objective function.
    objective_value: f64,
    /// (variable name, solution value) tuples. Decision variables `x1, x2, ...` come first, slack
    /// variables `s1, s2, ...` follow.
    solution_values: Vec<(String, f64)>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: f64, solution_values: Vec<(String, f64)>) -> Self {
        Self {
            objective_value,
            solution_values,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// All (name, value) tuples.
    pub fn solution_values(&self) -> &[(String, f64)] {
        &self.solution_values
    }

    /// Look up the value of a variable by name.
    ///
    /// # Return value
    ///
    /// `None` if the solution has no variable with that name.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.solution_values.iter()
            .find(|(candidate, _)| candidate == name)
            .map(|&(_, value)| value)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimum: {}", self.objective_value)?;
        for (name, value) in &self.solution_values {
            writeln!(f, "{} = {}", name, value)?;
        }

        Ok(())
    }
}
