//! Problem formulation for iterative sample size solving.

use std::convert::Infallible;

use twine_core::EquationProblem;

use crate::models::reliability::binomial::Coverage;

/// Equation problem for reaching a target confidence.
///
/// The solver variable is the continuous sample size and the residual is
/// `achieved_confidence - target_confidence`.
pub(super) struct SampleSizeProblem {
    target: f64,
}

impl SampleSizeProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SampleSizeProblem {
    type Input = f64;
    type Output = Coverage;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.confidence - self.target])
    }
}
