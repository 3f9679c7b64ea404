//! # Algorithms
//!
//! The two phase simplex method on a dense tableau, together with the types it reports its results
//! in and the options that configure it.
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(PartialEq, Debug, Clone)]
pub enum OptimizationResult {
    Infeasible,
    FiniteOptimum(BasicSolution),
    Unbounded,
}

/// Values read from a tableau that is optimal.
///
/// The values are expressed in the variables of the `StandardForm` that was solved.
#[derive(PartialEq, Debug, Clone)]
pub struct BasicSolution {
    /// Right-hand side of the objective row.
    objective_value: f64,
    /// One value for each column of the `StandardForm`.
    variable_values: Vec<f64>,
    /// One value for each slack or surplus column, in column order.
    slack_values: Vec<f64>,
}

impl BasicSolution {
    /// Create a new instance.
    pub fn new(objective_value: f64, variable_values: Vec<f64>, slack_values: Vec<f64>) -> Self {
        Self { objective_value, variable_values, slack_values }
    }

    /// Value of the maximized objective function, constant included.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Values of the decision variables; zero when a variable is not basic.
    pub fn variable_values(&self) -> &[f64] {
        &self.variable_values
    }

    /// Values of the slack and surplus variables; zero when a variable is not basic.
    pub fn slack_values(&self) -> &[f64] {
        &self.slack_values
    }
}

/// Configuration of a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Values with an absolute value not larger than this are treated as zero.
    ///
    /// This applies when selecting an entering column, during the ratio test, when detecting basic
    /// columns and when checking whether phase one reached a zero objective. With the default of
    /// `0.0`, all of these comparisons are exact.
    pub tolerance: f64,
    /// Maximum number of pivots in each of the two phases.
    ///
    /// `None` lets a phase pivot until it terminates by itself, which might never happen on a
    /// cycling problem.
    pub max_iterations: Option<usize>,
}

impl SolveOptions {
    /// Default cap on the number of pivots in a single phase.
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    /// Replace the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        debug_assert!(tolerance >= 0.0);

        self.tolerance = tolerance;
        self
    }

    /// Replace the pivot cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            max_iterations: Some(Self::DEFAULT_MAX_ITERATIONS),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::SolveOptions;

    #[test]
    fn options() {
        let options = SolveOptions::default();
        assert_eq!(options.tolerance, 0.0);
        assert_eq!(options.max_iterations, Some(10_000));

        let options = options.with_tolerance(1e-9).with_max_iterations(None);
        assert_eq!(options, SolveOptions { tolerance: 1e-9, max_iterations: None });
    }
}
