use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    angular_velocity::radian_per_second,
    electric_current::ampere,
    electric_potential::volt,
    f64::{AngularVelocity, ElectricCurrent, ElectricPotential, Torque},
    torque::newton_meter,
};

use super::{DcMotor, MotorError, MotorParameters};

/// Supply voltage and shaft load defining a motor operating condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingInput {
    pub voltage: ElectricPotential,
    pub load_torque: Torque,
}

/// Equilibrium shaft speed and winding current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub speed: AngularVelocity,
    pub current: ElectricCurrent,
}

impl<Dynamics> DcMotor<Dynamics> {
    /// Equilibrium speed and current for a supply voltage and load torque.
    ///
    /// Setting both time derivatives of the motor equations to zero gives
    ///
    /// ```text
    /// ω = (K·V − τ·R) / (K² + b·R)
    /// i = (V − K·ω) / R
    /// ```
    ///
    /// which depends on neither inertia nor inductance.
    #[must_use]
    pub fn steady_state(&self, voltage: ElectricPotential, load_torque: Torque) -> OperatingPoint {
        let (speed, current) = equilibrium(
            &self.parameters,
            voltage.get::<volt>(),
            load_torque.get::<newton_meter>(),
        );

        OperatingPoint {
            speed: AngularVelocity::new::<radian_per_second>(speed),
            current: ElectricCurrent::new::<ampere>(current),
        }
    }

    /// Element-wise [`steady_state`](Self::steady_state) over paired sequences.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::LengthMismatch`] if the sequences differ in length.
    pub fn steady_states(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
    ) -> Result<Vec<OperatingPoint>, MotorError> {
        if voltage.len() != load_torque.len() {
            return Err(MotorError::LengthMismatch {
                voltage: voltage.len(),
                load_torque: load_torque.len(),
            });
        }

        Ok(voltage
            .iter()
            .zip(load_torque)
            .map(|(&v, &tau)| self.steady_state(v, tau))
            .collect())
    }
}

/// Steady-state motor as a [`Model`] from operating input to operating point.
impl<Dynamics> Model for DcMotor<Dynamics> {
    type Input = OperatingInput;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.steady_state(input.voltage, input.load_torque))
    }
}

/// Returns `(ω, i)` in SI units for voltage `v` and load torque `tau`.
pub(super) fn equilibrium(parameters: &MotorParameters, v: f64, tau: f64) -> (f64, f64) {
    let (r, b, k) = parameters.si();
    let speed = (k * v - tau * r) / (k * k + b * r);
    let current = (v - k * speed) / r;
    (speed, current)
}
