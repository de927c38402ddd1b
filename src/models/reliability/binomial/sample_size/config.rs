use twine_solvers::equation::bisection;

/// Solver configuration for the general-case sample size solve.
#[derive(Debug, Clone, Copy)]
pub struct SampleSizeConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the continuous sample size.
    pub sample_size_tol: f64,

    /// Relative tolerance on the continuous sample size.
    pub relative_tol: f64,

    /// Absolute tolerance for the confidence residual (achieved - target).
    pub confidence_tol: f64,

    /// Largest sample size considered when bracketing the root.
    pub max_sample_size: f64,
}

impl Default for SampleSizeConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            sample_size_tol: 1e-6,
            relative_tol: 1e-12,
            confidence_tol: 1e-12,
            max_sample_size: 1e9,
        }
    }
}

impl SampleSizeConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.sample_size_tol,
            x_rel_tol: self.relative_tol,
            residual_tol: self.confidence_tol,
        }
    }
}
