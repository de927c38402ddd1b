//! Iterative sample size solver for tests that tolerate failures.
//!
//! With one or more tolerated failures the cumulative binomial equation has no
//! closed-form inverse. This module brackets the continuous sample size at
//! which the target confidence is reached, refines it by bisection, and then
//! settles on the smallest whole number of trials that meets the target.

mod config;
mod problem;

pub use config::SampleSizeConfig;

use twine_core::Model;
use twine_solvers::equation::bisection;

use super::{
    BinomialConfidence, ProbabilityInput, ReliabilityError, ceil_sample_size,
    error::probability, smallest_sufficient,
};

use problem::SampleSizeProblem;

/// Number of trials needed to claim `reliability` with `confidence` while
/// tolerating `failures` failed trials.
///
/// Uses [`SampleSizeConfig::default`]. See [`sample_size_with`].
///
/// # Errors
///
/// Returns a [`ReliabilityError`] if either probability lies outside (0, 1)
/// or if the solver fails to converge.
pub fn sample_size(
    reliability: f64,
    confidence: f64,
    failures: u64,
) -> Result<u64, ReliabilityError> {
    sample_size_with(reliability, confidence, failures, SampleSizeConfig::default())
}

/// Number of trials needed to claim `reliability` with `confidence` while
/// tolerating `failures` failed trials, using an explicit solver configuration.
///
/// The result is the smallest sample size `n` for which
/// [`confidence_level(n, failures, reliability)`](confidence_level) reaches
/// `confidence`. It is never rounded down: a test sized by this function
/// always demonstrates at least the requested confidence.
///
/// # Example
///
/// ```
/// use engcalc_models::models::reliability::binomial::sample_size;
///
/// assert_eq!(sample_size(0.9, 0.95, 1).unwrap(), 46);
/// ```
///
/// # Errors
///
/// - [`ReliabilityError::Validation`] if either probability lies outside (0, 1).
/// - [`ReliabilityError::Unbracketed`] if the target is not reached below
///   [`SampleSizeConfig::max_sample_size`].
/// - [`ReliabilityError::NonFinite`] if the confidence can't be evaluated
///   while bracketing or settling on an integer.
/// - [`ReliabilityError::Bisection`] or [`ReliabilityError::MaxIters`] if the
///   solver fails to converge.
pub fn sample_size_with(
    reliability: f64,
    confidence: f64,
    failures: u64,
    config: SampleSizeConfig,
) -> Result<u64, ReliabilityError> {
    let reliability = probability(ProbabilityInput::Reliability, reliability)?;
    let target = probability(ProbabilityInput::Confidence, confidence)?.into_inner();

    let model = BinomialConfidence::new(reliability, failures);
    let problem = SampleSizeProblem::new(target);

    // With n == f every outcome has at most f failures, so confidence is zero.
    #[allow(clippy::cast_precision_loss)]
    let lower = failures as f64;
    let upper = upper_bracket(&model, target, lower, config.max_sample_size)?;

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Treat a failed evaluation as overshooting the target. The integer
            // result is re-checked with finite evaluations below.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ReliabilityError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let root = ceil_sample_size(solution.snapshot.output.sample_size);
    smallest_sufficient(root, failures, model.reliability(), target)
        .map_err(ReliabilityError::from)
}

/// Doubles the upper end of the bracket until the target confidence is met.
fn upper_bracket(
    model: &BinomialConfidence,
    target: f64,
    lower: f64,
    max_sample_size: f64,
) -> Result<f64, ReliabilityError> {
    let mut upper = lower + 1.0;
    while upper <= max_sample_size {
        if model.call(&upper)?.confidence >= target {
            return Ok(upper);
        }
        upper *= 2.0;
    }
    Err(ReliabilityError::Unbracketed { max_sample_size })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::reliability::binomial::{
        confidence_level, sample_size_zero_failures, test_support::REFERENCE_SAMPLE_SIZES,
    };

    #[test]
    fn reproduces_reference_table() {
        for &(reliability, confidence, failures, expected) in REFERENCE_SAMPLE_SIZES {
            let n = sample_size(reliability, confidence, failures).unwrap();
            assert_eq!(
                n, expected,
                "R={reliability}, C={confidence}, f={failures}"
            );
        }
    }

    #[test]
    fn agrees_with_closed_form_for_zero_failures() {
        // 0.19 with R = 0.9 and 0.75 with R = 0.5 give whole-number quotients.
        for reliability in [0.5, 0.7, 0.8, 0.9, 0.95, 0.99, 0.999] {
            for confidence in [0.19, 0.5, 0.75, 0.8, 0.9, 0.95, 0.99] {
                assert_eq!(
                    sample_size(reliability, confidence, 0).unwrap(),
                    sample_size_zero_failures(reliability, confidence).unwrap(),
                    "R={reliability}, C={confidence}"
                );
            }
        }
    }

    #[test]
    fn result_is_smallest_sufficient_sample() {
        for failures in 0..6 {
            for (reliability, confidence) in [(0.8, 0.9), (0.9, 0.95), (0.95, 0.99), (0.6, 0.5)] {
                let n = sample_size(reliability, confidence, failures).unwrap();

                assert!(confidence_level(n, failures, reliability) >= confidence - 1e-9);
                assert!(
                    n == failures || confidence_level(n - 1, failures, reliability) < confidence
                );
            }
        }
    }

    #[test]
    fn whole_number_quotient_matches_closed_form() {
        // ln(0.81) / ln(0.9) rounds to just below 2.
        assert_eq!(sample_size(0.9, 0.19, 0).unwrap(), 2);
        assert_eq!(sample_size_zero_failures(0.9, 0.19).unwrap(), 2);
    }

    #[test]
    fn many_tolerated_failures() {
        // About 1% of a 0.99-reliable population fails, so tolerating 200
        // failures at even odds needs roughly 20 000 trials.
        let n = sample_size(0.99, 0.5, 200).unwrap();
        assert_eq!(n, 20_067);
        assert!(confidence_level(n, 200, 0.99) >= 0.5);
        assert!(confidence_level(n - 1, 200, 0.99) < 0.5);

        let n = sample_size(0.9999, 0.9, 100).unwrap();
        assert_eq!(n, 1_140_739);
        assert!(confidence_level(n, 100, 0.9999).is_finite());
    }

    #[test]
    fn more_failures_need_more_samples() {
        let sizes: Vec<u64> = (0..5)
            .map(|failures| sample_size(0.9, 0.9, failures).unwrap())
            .collect();

        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rejects_invalid_probabilities() {
        assert!(matches!(
            sample_size(1.0, 0.9, 1),
            Err(ReliabilityError::Validation {
                input: ProbabilityInput::Reliability,
                ..
            })
        ));
        assert!(matches!(
            sample_size(0.9, 0.0, 1),
            Err(ReliabilityError::Validation {
                input: ProbabilityInput::Confidence,
                ..
            })
        ));
    }

    #[test]
    fn reports_unbracketed_target() {
        let config = SampleSizeConfig {
            max_sample_size: 10.0,
            ..SampleSizeConfig::default()
        };

        assert!(matches!(
            sample_size_with(0.9, 0.95, 1, config),
            Err(ReliabilityError::Unbracketed { .. })
        ));
    }

    #[test]
    fn reports_non_convergence() {
        let config = SampleSizeConfig {
            max_iters: 2,
            sample_size_tol: 1e-15,
            relative_tol: 1e-15,
            confidence_tol: 1e-15,
            ..SampleSizeConfig::default()
        };

        assert!(matches!(
            sample_size_with(0.9, 0.95, 3, config),
            Err(ReliabilityError::MaxIters { .. })
        ));
    }
}
