//! Brushed DC motor with a linear electromechanical model.
//!
//! The motor couples an armature circuit to a rotor through a single motor
//! constant `K`, which serves as both the torque constant and the back-EMF
//! constant in SI units:
//!
//! ```text
//! V = R·i + K·ω + L·di/dt
//! K·i = τ_load + b·ω + J·dω/dt
//! ```
//!
//! Steady-state analysis needs only `R`, `b` and `K`. Time-domain analysis
//! also needs the rotor inertia `J` and winding inductance `L`, and is only
//! available on a [`DcMotor<Dynamic>`], built with [`DcMotor::with_dynamics`].
//! Callers holding optional inertia and inductance can use [`MotorModel`],
//! which reports [`MotorError::MissingDynamics`] instead.
//!
//! # Example
//!
//! ```
//! use engcalc_models::{
//!     models::electrical::dc_motor::{DcMotor, DynamicParameters, MotorParameters},
//!     support::units::{MotorConstant, RotationalDamping, RotationalDampingExt},
//! };
//! use uom::si::{
//!     angular_velocity::radian_per_second,
//!     electric_potential::volt,
//!     electrical_resistance::ohm,
//!     f64::{ElectricPotential, ElectricalResistance, Inductance, MomentOfInertia},
//!     inductance::millihenry,
//!     magnetic_flux::weber,
//!     moment_of_inertia::kilogram_square_meter,
//!     time::millisecond,
//! };
//!
//! let parameters = MotorParameters::new(
//!     ElectricalResistance::new::<ohm>(1.25),
//!     RotationalDamping::from_newton_meter_seconds(2.13e-7),
//!     MotorConstant::new::<weber>(4.45e-3),
//! )
//! .unwrap();
//!
//! let motor = DcMotor::new(parameters);
//! let voltage = ElectricPotential::new::<volt>(6.0);
//!
//! // No speed at the stall torque.
//! let stalled = motor.steady_state(voltage, motor.stall_torque(voltage));
//! assert!(stalled.speed.get::<radian_per_second>().abs() < 1e-9);
//!
//! let motor = motor.with_dynamics(
//!     DynamicParameters::new(
//!         MomentOfInertia::new::<kilogram_square_meter>(1e-7),
//!         Inductance::new::<millihenry>(0.036),
//!     )
//!     .unwrap(),
//! );
//!
//! let tau = motor.time_constant_mech(voltage).unwrap();
//! assert!((tau.get::<millisecond>() - 6.35).abs() < 1.0);
//! ```

mod characteristics;
mod error;
mod parameters;
mod simulate;
mod state_space;
mod steady_state;

#[cfg(test)]
mod test_support;

pub use characteristics::{CharacteristicPoint, TimeConstantConfig};
pub use error::MotorError;
pub use parameters::{DynamicParameters, MotorParameters, MotorParametersError};
pub use simulate::{InputHold, MotorState, SimulationConfig, SimulationSample};
pub use state_space::StateSpace;
pub use steady_state::{OperatingInput, OperatingPoint};

use uom::si::f64::{
    AngularVelocity, ElectricCurrent, ElectricPotential, ElectricalResistance, Inductance,
    MomentOfInertia, Ratio, Time, Torque,
};

use crate::support::units::MotorConstant;

/// Marker for a motor limited to steady-state analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Static;

/// Inertia, inductance and the derived state-space form of a motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dynamic {
    parameters: DynamicParameters,
    state_space: StateSpace,
}

/// A brushed DC motor.
///
/// The type parameter records whether the motor can be simulated:
/// [`DcMotor<Static>`] supports steady-state analysis only, while
/// [`DcMotor<Dynamic>`] also supports simulation and time constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DcMotor<Dynamics = Static> {
    parameters: MotorParameters,
    dynamics: Dynamics,
}

impl DcMotor<Static> {
    /// Creates a motor for steady-state analysis.
    #[must_use]
    pub fn new(parameters: MotorParameters) -> Self {
        Self {
            parameters,
            dynamics: Static,
        }
    }

    /// Adds inertia and inductance, building the state-space matrices.
    #[must_use]
    pub fn with_dynamics(self, dynamics: DynamicParameters) -> DcMotor<Dynamic> {
        DcMotor {
            parameters: self.parameters,
            dynamics: Dynamic {
                parameters: dynamics,
                state_space: StateSpace::new(&self.parameters, &dynamics),
            },
        }
    }
}

impl<Dynamics> DcMotor<Dynamics> {
    /// Resistance, damping and motor constant.
    #[must_use]
    pub fn parameters(&self) -> &MotorParameters {
        &self.parameters
    }
}

impl DcMotor<Dynamic> {
    /// Rotor inertia and winding inductance.
    #[must_use]
    pub fn dynamic_parameters(&self) -> &DynamicParameters {
        &self.dynamics.parameters
    }

    /// State-space matrices with state `[ω, i]` and input `[V, τ_load]`.
    #[must_use]
    pub fn state_space(&self) -> &StateSpace {
        &self.dynamics.state_space
    }

    /// Drops the dynamic parameters.
    #[must_use]
    pub fn without_dynamics(&self) -> DcMotor<Static> {
        DcMotor::new(self.parameters)
    }
}

/// A DC motor whose inertia and inductance may be unknown.
///
/// Steady-state operations are always available. Dynamic operations return
/// [`MotorError::MissingDynamics`] on the [`MotorModel::Static`] variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorModel {
    Static(DcMotor<Static>),
    Dynamic(DcMotor<Dynamic>),
}

impl MotorModel {
    /// Creates a motor, enabling dynamics only when both inertia and
    /// inductance are given.
    ///
    /// # Errors
    ///
    /// Returns [`MotorParametersError`] if the inertia or inductance is given
    /// but not strictly positive.
    pub fn new(
        parameters: MotorParameters,
        inertia: Option<MomentOfInertia>,
        inductance: Option<Inductance>,
    ) -> Result<Self, MotorParametersError> {
        let motor = DcMotor::new(parameters);

        match (inertia, inductance) {
            (Some(inertia), Some(inductance)) => Ok(Self::Dynamic(
                motor.with_dynamics(DynamicParameters::new(inertia, inductance)?),
            )),
            _ => Ok(Self::Static(motor)),
        }
    }

    /// Creates a motor with its damping constant derived from a no-load test.
    ///
    /// See [`MotorParameters::from_free_run`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorParametersError`] if any parameter is invalid.
    pub fn from_free_run_data(
        free_current: ElectricCurrent,
        free_speed: AngularVelocity,
        resistance: ElectricalResistance,
        motor_constant: MotorConstant,
        inertia: Option<MomentOfInertia>,
        inductance: Option<Inductance>,
    ) -> Result<Self, MotorParametersError> {
        let parameters =
            MotorParameters::from_free_run(free_current, free_speed, resistance, motor_constant)?;
        Self::new(parameters, inertia, inductance)
    }

    /// Returns `true` if the motor can be simulated.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Resistance, damping and motor constant.
    #[must_use]
    pub fn parameters(&self) -> &MotorParameters {
        match self {
            Self::Static(motor) => motor.parameters(),
            Self::Dynamic(motor) => motor.parameters(),
        }
    }

    /// The motor restricted to steady-state analysis.
    #[must_use]
    pub fn without_dynamics(&self) -> DcMotor<Static> {
        DcMotor::new(*self.parameters())
    }

    /// The simulation-capable motor.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::MissingDynamics`] for a static motor.
    pub fn as_dynamic(&self) -> Result<&DcMotor<Dynamic>, MotorError> {
        match self {
            Self::Static(_) => Err(MotorError::MissingDynamics),
            Self::Dynamic(motor) => Ok(motor),
        }
    }

    /// See [`DcMotor::steady_state`].
    #[must_use]
    pub fn steady_state(&self, voltage: ElectricPotential, load_torque: Torque) -> OperatingPoint {
        self.without_dynamics().steady_state(voltage, load_torque)
    }

    /// See [`DcMotor::steady_states`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::LengthMismatch`] if the sequences differ in length.
    pub fn steady_states(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
    ) -> Result<Vec<OperatingPoint>, MotorError> {
        self.without_dynamics().steady_states(voltage, load_torque)
    }

    /// See [`DcMotor::stall_torque`].
    #[must_use]
    pub fn stall_torque(&self, voltage: ElectricPotential) -> Torque {
        self.without_dynamics().stall_torque(voltage)
    }

    /// See [`DcMotor::stall_current`].
    #[must_use]
    pub fn stall_current(&self, voltage: ElectricPotential) -> ElectricCurrent {
        self.without_dynamics().stall_current(voltage)
    }

    /// See [`DcMotor::free_run`].
    #[must_use]
    pub fn free_run(&self, voltage: ElectricPotential) -> OperatingPoint {
        self.without_dynamics().free_run(voltage)
    }

    /// See [`DcMotor::characterisation`].
    #[must_use]
    pub fn characterisation(&self, voltage: ElectricPotential) -> Vec<CharacteristicPoint> {
        self.without_dynamics().characterisation(voltage)
    }

    /// See [`DcMotor::characterisation_with`].
    #[must_use]
    pub fn characterisation_with(
        &self,
        voltage: ElectricPotential,
        samples: usize,
    ) -> Vec<CharacteristicPoint> {
        self.without_dynamics()
            .characterisation_with(voltage, samples)
    }

    /// See [`DcMotor::peak_efficiency`].
    #[must_use]
    pub fn peak_efficiency(&self, voltage: ElectricPotential) -> Ratio {
        self.without_dynamics().peak_efficiency(voltage)
    }

    /// See [`DcMotor::simulate`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::MissingDynamics`] for a static motor, or any
    /// error from [`DcMotor::simulate`].
    pub fn simulate(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
        dt: Time,
        initial: MotorState,
    ) -> Result<Vec<SimulationSample>, MotorError> {
        self.as_dynamic()?
            .simulate(voltage, load_torque, dt, initial)
    }

    /// See [`DcMotor::simulate_with`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::MissingDynamics`] for a static motor, or any
    /// error from [`DcMotor::simulate_with`].
    pub fn simulate_with(
        &self,
        voltage: &[ElectricPotential],
        load_torque: &[Torque],
        dt: Time,
        initial: MotorState,
        config: SimulationConfig,
    ) -> Result<Vec<SimulationSample>, MotorError> {
        self.as_dynamic()?
            .simulate_with(voltage, load_torque, dt, initial, config)
    }

    /// See [`DcMotor::time_constant_mech`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::MissingDynamics`] for a static motor, or
    /// [`MotorError::NoStepResponse`] if the rotor never moves.
    pub fn time_constant_mech(&self, voltage: ElectricPotential) -> Result<Time, MotorError> {
        self.as_dynamic()?.time_constant_mech(voltage)
    }

    /// See [`DcMotor::time_constant_mech_with`].
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::MissingDynamics`] for a static motor, or any
    /// error from [`DcMotor::time_constant_mech_with`].
    pub fn time_constant_mech_with(
        &self,
        voltage: ElectricPotential,
        config: TimeConstantConfig,
    ) -> Result<Time, MotorError> {
        self.as_dynamic()?.time_constant_mech_with(voltage, config)
    }
}

impl From<DcMotor<Static>> for MotorModel {
    fn from(motor: DcMotor<Static>) -> Self {
        Self::Static(motor)
    }
}

impl From<DcMotor<Dynamic>> for MotorModel {
    fn from(motor: DcMotor<Dynamic>) -> Self {
        Self::Dynamic(motor)
    }
}
