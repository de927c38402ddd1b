//! Binomial reliability for pass/fail testing.
//!
//! The cumulative binomial equation relates four quantities of a pass/fail
//! test: the claimed reliability `R`, the confidence `C` in that claim, the
//! sample size `n` and the number of observed failures `f`:
//!
//! ```text
//! C = 1 - Σ_{i=0}^{f} C(n, i) · (1 - R)^i · R^(n - i)
//! ```
//!
//! A statement backed by this equation reads "we are 95% sure that 90% of our
//! products would pass this test, because we tested 29 and saw no failures".
//!
//! # Operations
//!
//! - [`confidence_level`]: confidence demonstrated by a test outcome.
//! - [`sample_size_zero_failures`]: closed-form sample size when no failures
//!   are tolerated.
//! - [`sample_size`]: sample size for any number of tolerated failures,
//!   solved iteratively.
//!
//! Element-wise forms ([`confidence_levels`], [`sample_sizes_zero_failures`])
//! accept sequences for sweeping one variable while holding another fixed.
//!
//! # Example
//!
//! ```
//! use engcalc_models::models::reliability::binomial::{
//!     confidence_level, sample_size, sample_size_zero_failures,
//! };
//!
//! let n = sample_size_zero_failures(0.9, 0.95).unwrap();
//! assert_eq!(n, 29);
//! assert!(confidence_level(n, 0, 0.9) >= 0.95);
//!
//! // Tolerating a failure requires a larger test.
//! assert_eq!(sample_size(0.9, 0.95, 1).unwrap(), 46);
//! ```

mod broadcast;
mod error;
mod model;
mod sample_size;

#[cfg(test)]
mod test_support;

pub use error::{ProbabilityInput, ReliabilityError};
pub use model::{BinomialConfidence, Coverage, NonFiniteConfidence};
pub use sample_size::{SampleSizeConfig, sample_size, sample_size_with};

use crate::support::constraint::{Constrained, UnitIntervalOpen};

use broadcast::pair;
use error::probability;

/// A probability strictly between 0 and 1.
pub type Probability = Constrained<f64, UnitIntervalOpen>;

/// Relative distance from an integer below which a closed-form sample size
/// is treated as that integer.
const INTEGER_SNAP_TOL: f64 = 1e-9;

/// Relative slack on the pass probability `1 - C` when deciding whether a
/// sample size reaches a target confidence.
///
/// Both the closed form and the iterative solver settle on an integer with
/// this test, so they agree when `ln(1 - C) / ln(R)` is an exact integer.
const SUFFICIENCY_TOL: f64 = 1e-9;

/// Confidence that the true reliability is at least `reliability`, given
/// `failures` failures observed in `sample_size` trials.
///
/// Inputs are not validated. A reliability outside (0, 1) produces a
/// meaningless result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn confidence_level(sample_size: u64, failures: u64, reliability: f64) -> f64 {
    1.0 - pass_probability(sample_size as f64, failures, reliability)
}

/// Element-wise [`confidence_level`] over a sequence of reliabilities.
#[must_use]
pub fn confidence_levels(sample_size: u64, failures: u64, reliabilities: &[f64]) -> Vec<f64> {
    reliabilities
        .iter()
        .map(|&reliability| confidence_level(sample_size, failures, reliability))
        .collect()
}

/// Number of trials without failure needed to claim `reliability` with
/// `confidence`.
///
/// Solves `C = 1 - R^n` for `n = ln(1 - C) / ln(R)` and rounds up, so the
/// returned sample size always demonstrates at least the requested confidence.
///
/// # Errors
///
/// Returns [`ReliabilityError::Validation`] if either value lies outside the
/// open interval (0, 1).
pub fn sample_size_zero_failures(
    reliability: f64,
    confidence: f64,
) -> Result<u64, ReliabilityError> {
    let reliability = probability(ProbabilityInput::Reliability, reliability)?;
    let confidence = probability(ProbabilityInput::Confidence, confidence)?;
    zero_failure_sample_size(reliability, confidence)
}

/// Element-wise [`sample_size_zero_failures`].
///
/// The sequences must have equal lengths, or one of them may hold a single
/// value that is paired with every element of the other. Every value is
/// validated before any sample size is computed.
///
/// # Example
///
/// ```
/// use engcalc_models::models::reliability::binomial::sample_sizes_zero_failures;
///
/// let sizes = sample_sizes_zero_failures(&[0.8, 0.9], &[0.9]).unwrap();
/// assert_eq!(sizes, vec![11, 22]);
/// ```
///
/// # Errors
///
/// - [`ReliabilityError::ShapeMismatch`] if the sequences can't be paired.
/// - [`ReliabilityError::Validation`] if any value lies outside (0, 1).
pub fn sample_sizes_zero_failures(
    reliabilities: &[f64],
    confidences: &[f64],
) -> Result<Vec<u64>, ReliabilityError> {
    let validated = pair(reliabilities, confidences)?
        .into_iter()
        .map(|(reliability, confidence)| {
            Ok((
                probability(ProbabilityInput::Reliability, reliability)?,
                probability(ProbabilityInput::Confidence, confidence)?,
            ))
        })
        .collect::<Result<Vec<_>, ReliabilityError>>()?;

    validated
        .into_iter()
        .map(|(reliability, confidence)| zero_failure_sample_size(reliability, confidence))
        .collect()
}

fn zero_failure_sample_size(
    reliability: Probability,
    confidence: Probability,
) -> Result<u64, ReliabilityError> {
    let (reliability, confidence) = (reliability.into_inner(), confidence.into_inner());
    let n = (1.0 - confidence).ln() / reliability.ln();
    smallest_sufficient(ceil_sample_size(n), 0, reliability, confidence)
        .map_err(ReliabilityError::from)
}

/// Rounds a continuous sample size up to a whole number of trials.
///
/// Values within floating-point noise of an integer are taken as that integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_sample_size(n: f64) -> u64 {
    let nearest = n.round();
    if (n - nearest).abs() <= INTEGER_SNAP_TOL * nearest.max(1.0) {
        nearest.max(0.0) as u64
    } else {
        n.ceil().max(0.0) as u64
    }
}

/// Walks from `start` to the smallest sample size that reaches `confidence`.
///
/// # Errors
///
/// Returns [`NonFiniteConfidence`] if any evaluation along the way is not finite.
fn smallest_sufficient(
    start: u64,
    failures: u64,
    reliability: f64,
    confidence: f64,
) -> Result<u64, NonFiniteConfidence> {
    let mut n = start.max(failures);
    while n > failures && is_sufficient(n - 1, failures, reliability, confidence)? {
        n -= 1;
    }
    while !is_sufficient(n, failures, reliability, confidence)? {
        n += 1;
    }
    Ok(n)
}

/// Whether `sample_size` trials with at most `failures` failures demonstrate
/// `confidence`, up to [`SUFFICIENCY_TOL`].
#[allow(clippy::cast_precision_loss)]
fn is_sufficient(
    sample_size: u64,
    failures: u64,
    reliability: f64,
    confidence: f64,
) -> Result<bool, NonFiniteConfidence> {
    let sample_size = sample_size as f64;
    let pass = pass_probability(sample_size, failures, reliability);
    if !pass.is_finite() {
        return Err(NonFiniteConfidence { sample_size });
    }
    Ok(pass <= (1.0 - confidence) * (1.0 + SUFFICIENCY_TOL))
}

/// Probability that a product of `reliability` shows at most `failures`
/// failures in `sample_size` trials, for a possibly fractional sample size.
///
/// Each term `C(n, i) · (1 - R)^i · R^(n - i)` is built in log space, with
/// `ln C(n, i)` accumulated from `C(n, i) = C(n, i - 1) · (n - i + 1) / i`.
/// The multiplicative form extends to real `n`, and working with logarithms
/// keeps large coefficients and tiny powers from overflowing or underflowing
/// before they are combined.
fn pass_probability(sample_size: f64, failures: u64, reliability: f64) -> f64 {
    let ln_reliability = reliability.ln();
    let ln_unreliability = (1.0 - reliability).ln();

    let mut ln_coefficient = 0.0;
    let mut total = 0.0;
    for i in 0..=failures {
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        if i > 0.0 {
            let remaining = sample_size - (i - 1.0);
            // C(n, i) vanishes for whole n < i.
            if remaining <= 0.0 {
                break;
            }
            ln_coefficient += (remaining / i).ln();
        }
        let ln_term = ln_coefficient + i * ln_unreliability + (sample_size - i) * ln_reliability;
        total += ln_term.exp();
    }

    total
}
