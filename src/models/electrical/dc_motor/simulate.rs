use nalgebra::Vector2;
use uom::si::{
    angular_velocity::radian_per_second,
    electric_current::ampere,
    electric_potential::volt,
    f64::{AngularVelocity, ElectricCurrent, ElectricPotential, Time, Torque},
    time::second,
    torque::newton_meter,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{DcMotor, Dynamic, MotorError};

/// Rotor speed and winding current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorState {
    pub speed: AngularVelocity,
    pub current: ElectricCurrent,
}

impl MotorState {
    /// A motor at rest with no current.
    #[must_use]
    pub fn rest() -> Self {
        Self {
            speed: AngularVelocity::new::<radian_per_second>(0.0),
            current: ElectricCurrent::new::<ampere>(0.0),
        }
    }

    fn to_vector(self) -> Vector2<f64> {
        Vector2::new(
            self.speed.get::<radian_per_second>(),
            self.current.get::<ampere>(),
        )
    }

    fn from_vector(x: &Vector2<f64>) -> Self {
        Self {
            speed: AngularVelocity::new::<radian_per_second>(x[0]),
            current: ElectricCurrent::new::<ampere>(x[1]),
        }
    }
}

impl Default for MotorState {
    fn default() -> Self {
        Self::rest()
    }
}

/// One row of a simulated time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSample {
    pub time: Time,
    pub voltage: ElectricPotential,
    pub torque: Torque,
    pub speed: AngularVelocity,
    pub current: ElectricCurrent,
}

/// How inputs behave between consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputHold {
    /// Each input is held constant until the next sample.
    ZeroOrder,
    /// Inputs vary linearly between samples.
    #[default]
    FirstOrder,
}

/// Configuration for [`DcMotor::simulate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationConfig {
    pub hold: InputHold,
}

impl DcMotor<Dynamic> {
    /// Simulates the response to sampled voltage and load torque inputs.
    ///
    /// Uses the default [`SimulationConfig`], which interpolates inputs
    /// linearly between samples.
    ///
    /// # Errors
    ///
    /// See [`DcMotor::simulate_with`].
    pub fn simulate(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
        dt: Time,
        initial: MotorState,
    ) -> Result<Vec<SimulationSample>, MotorError> {
        self.simulate_with(
            voltage,
            load_torque,
            dt,
            initial,
            SimulationConfig::default(),
        )
    }

    /// Simulates the response to sampled inputs with explicit configuration.
    ///
    /// Input `k` applies at time `k·dt`. The returned series has one sample
    /// per input, starting from `initial` at time zero. The system is
    /// discretized exactly for the given step, so accuracy does not depend
    /// on `dt` beyond how well the samples describe the inputs.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::LengthMismatch`] if the input sequences differ in
    /// length, or [`MotorError::InvalidTimeStep`] if `dt` is not finite and
    /// strictly positive.
    pub fn simulate_with(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
        dt: Time,
        initial: MotorState,
        config: SimulationConfig,
    ) -> Result<Vec<SimulationSample>, MotorError> {
        if voltage.len() != load_torque.len() {
            return Err(MotorError::LengthMismatch {
                voltage: voltage.len(),
                load_torque: load_torque.len(),
            });
        }
        if StrictlyPositive::check(&dt).is_err() || !dt.is_finite() {
            return Err(MotorError::InvalidTimeStep { dt });
        }

        let step = self.state_space().discretize(dt.get::<second>());
        let inputs: Vec<Vector2<f64>> = voltage
            .iter()
            .zip(load_torque)
            .map(|(v, tau)| Vector2::new(v.get::<volt>(), tau.get::<newton_meter>()))
            .collect();

        let mut x = initial.to_vector();
        let mut samples = Vec::with_capacity(inputs.len());

        for (k, u) in inputs.iter().enumerate() {
            let state = MotorState::from_vector(&x);
            samples.push(SimulationSample {
                time: sample_time(dt, k),
                voltage: voltage[k],
                torque: load_torque[k],
                speed: state.speed,
                current: state.current,
            });

            if let Some(u_next) = inputs.get(k + 1) {
                x = match config.hold {
                    InputHold::ZeroOrder => step.step_held(&x, u),
                    InputHold::FirstOrder => step.step_ramped(&x, u, u_next),
                };
            }
        }

        Ok(samples)
    }
}

#[allow(clippy::cast_precision_loss)]
fn sample_time(dt: Time, k: usize) -> Time {
    dt * k as f64
}
