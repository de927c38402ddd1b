use thiserror::Error;
use uom::si::f64::{ElectricPotential, Ratio, Time};

/// Errors that can occur while analyzing a DC motor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotorError {
    /// A dynamic analysis was requested for a motor without inertia and inductance.
    #[error("inertia and inductance must be defined to simulate dynamics")]
    MissingDynamics,

    /// Paired voltage and load torque sequences differ in length.
    #[error("voltage and load torque lengths differ: {voltage} != {load_torque}")]
    LengthMismatch { voltage: usize, load_torque: usize },

    /// The simulation time step is not finite and strictly positive.
    #[error("time step must be strictly positive: {dt:?}")]
    InvalidTimeStep { dt: Time },

    /// A time constant was requested from a window with no samples.
    #[error("time constant window must hold at least one sample")]
    NoSamples,

    /// The time constant threshold does not lie strictly between 0 and 1.
    #[error("time constant threshold must be between 0 and 1 exclusive: {threshold:?}")]
    InvalidThreshold { threshold: Ratio },

    /// The step response never moved the rotor, so no time constant exists.
    #[error("no speed response to a step of {voltage:?}")]
    NoStepResponse { voltage: ElectricPotential },
}
