use thiserror::Error;
use twine_core::Model;

use super::{Probability, pass_probability};

/// Confidence reached by a pass/fail test of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Number of trials, possibly fractional when driven by a solver.
    pub sample_size: f64,

    /// Confidence that the true reliability is at least the claimed level.
    pub confidence: f64,
}

/// Error returned when the confidence evaluation overflows or is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("confidence level is not finite at sample size {sample_size}")]
pub struct NonFiniteConfidence {
    pub sample_size: f64,
}

/// Cumulative binomial confidence as a [`Model`] of the sample size.
///
/// The reliability level and the number of tolerated failures are fixed at
/// construction. The input sample size is continuous so that equation
/// solvers can iterate on it.
///
/// # Example
///
/// ```
/// use engcalc_models::models::reliability::binomial::BinomialConfidence;
/// use engcalc_models::support::constraint::UnitIntervalOpen;
/// use twine_core::Model;
///
/// let model = BinomialConfidence::new(UnitIntervalOpen::new(0.9).unwrap(), 0);
/// let coverage = model.call(&29.0).unwrap();
/// assert!(coverage.confidence > 0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialConfidence {
    reliability: Probability,
    failures: u64,
}

impl BinomialConfidence {
    #[must_use]
    pub fn new(reliability: Probability, failures: u64) -> Self {
        Self {
            reliability,
            failures,
        }
    }

    /// Claimed reliability level.
    #[must_use]
    pub fn reliability(&self) -> f64 {
        self.reliability.into_inner()
    }

    /// Number of failures tolerated by the test.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl Model for BinomialConfidence {
    type Input = f64;
    type Output = Coverage;
    type Error = NonFiniteConfidence;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let sample_size = *input;
        let confidence = 1.0 - pass_probability(sample_size, self.failures, self.reliability());

        if !confidence.is_finite() {
            return Err(NonFiniteConfidence { sample_size });
        }

        Ok(Coverage {
            sample_size,
            confidence,
        })
    }
}
