use std::fmt;

use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::{ConstraintError, UnitIntervalOpen};

use super::{NonFiniteConfidence, Probability};

/// Names the probability input that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityInput {
    Reliability,
    Confidence,
}

impl fmt::Display for ProbabilityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reliability => f.write_str("reliability"),
            Self::Confidence => f.write_str("confidence"),
        }
    }
}

/// Errors that can occur while computing binomial reliability quantities.
#[derive(Debug, Error)]
pub enum ReliabilityError {
    /// A probability input was not strictly between 0 and 1.
    #[error("{input} must be between 0 and 1 exclusive, got {value}")]
    Validation {
        input: ProbabilityInput,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// Paired reliability and confidence sequences could not be matched up.
    ///
    /// Sequences must have equal lengths, or one of them must hold a single
    /// value that applies to every element of the other.
    #[error("cannot pair {reliability} reliabilities with {confidence} confidences")]
    ShapeMismatch { reliability: usize, confidence: usize },

    /// No sample size up to the configured limit reaches the target confidence.
    #[error("target confidence not reached below a sample size of {max_sample_size}")]
    Unbracketed { max_sample_size: f64 },

    /// The cumulative binomial sum could not be evaluated.
    #[error("confidence evaluation failed")]
    NonFinite(#[from] NonFiniteConfidence),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best confidence residual (achieved - target) encountered.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Validates a raw probability, tagging any failure with the input it came from.
pub(super) fn probability(
    input: ProbabilityInput,
    value: f64,
) -> Result<Probability, ReliabilityError> {
    UnitIntervalOpen::new(value).map_err(|source| ReliabilityError::Validation {
        input,
        value,
        source,
    })
}
