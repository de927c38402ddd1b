//! Continuous-time state-space form of the motor and its exact discretization.
//!
//! With state `x = [ω, i]` and input `u = [V, τ_load]` the electrical and
//! mechanical balances
//!
//! ```text
//! V = R·i + K·ω + L·di/dt
//! K·i = τ_load + b·ω + J·dω/dt
//! ```
//!
//! become `ẋ = A·x + B·u` with
//!
//! ```text
//! A = [ -b/J   K/J ]     B = [  0   -1/J ]
//!     [ -K/L  -R/L ]         [ 1/L    0  ]
//! ```

use nalgebra::{Matrix2, RowVector2, SMatrix, Vector2};

use super::{DynamicParameters, MotorParameters};

/// Linear state-space matrices `(A, B, C, D)` of a brushed DC motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpace {
    pub a: Matrix2<f64>,
    pub b: Matrix2<f64>,
    pub c: RowVector2<f64>,
    pub d: f64,
}

impl StateSpace {
    pub(super) fn new(parameters: &MotorParameters, dynamics: &DynamicParameters) -> Self {
        let (r, b, k) = parameters.si();
        let (j, l) = dynamics.si();

        Self {
            a: Matrix2::new(-b / j, k / j, -k / l, -r / l),
            b: Matrix2::new(0.0, -1.0 / j, 1.0 / l, 0.0),
            c: RowVector2::new(1.0, 1.0),
            d: 0.0,
        }
    }

    /// Discretizes the system for a fixed time step `dt` in seconds.
    ///
    /// Exponentiates the augmented block matrix
    ///
    /// ```text
    /// [ A·dt  B·dt  0 ]
    /// [  0     0    I ]
    /// [  0     0    0 ]
    /// ```
    ///
    /// whose top row of blocks holds the state transition and the input
    /// gains for both constant and linearly varying inputs across a step.
    pub(super) fn discretize(&self, dt: f64) -> Discretized {
        let mut augmented = SMatrix::<f64, 6, 6>::zeros();
        augmented
            .fixed_view_mut::<2, 2>(0, 0)
            .copy_from(&(self.a * dt));
        augmented
            .fixed_view_mut::<2, 2>(0, 2)
            .copy_from(&(self.b * dt));
        augmented
            .fixed_view_mut::<2, 2>(2, 4)
            .copy_from(&Matrix2::identity());

        let exp = augmented.exp();
        let gamma_total = exp.fixed_view::<2, 2>(0, 2).into_owned();
        let gamma_ramp = exp.fixed_view::<2, 2>(0, 4).into_owned();

        Discretized {
            phi: exp.fixed_view::<2, 2>(0, 0).into_owned(),
            gamma_start: gamma_total - gamma_ramp,
            gamma_end: gamma_ramp,
            gamma_total,
        }
    }
}

/// Discrete-time propagation matrices for one time step.
#[derive(Debug, Clone, Copy)]
pub(super) struct Discretized {
    /// State transition `e^(A·dt)`.
    phi: Matrix2<f64>,
    /// Weight of the input at the start of a step under linear interpolation.
    gamma_start: Matrix2<f64>,
    /// Weight of the input at the end of a step under linear interpolation.
    gamma_end: Matrix2<f64>,
    /// Input gain for an input held constant across the step.
    gamma_total: Matrix2<f64>,
}

impl Discretized {
    /// Advances with the input held at `u_start` for the whole step.
    pub(super) fn step_held(&self, x: &Vector2<f64>, u_start: &Vector2<f64>) -> Vector2<f64> {
        self.phi * x + self.gamma_total * u_start
    }

    /// Advances with the input varying linearly from `u_start` to `u_end`.
    pub(super) fn step_ramped(
        &self,
        x: &Vector2<f64>,
        u_start: &Vector2<f64>,
        u_end: &Vector2<f64>,
    ) -> Vector2<f64> {
        self.phi * x + self.gamma_start * u_start + self.gamma_end * u_end
    }
}
