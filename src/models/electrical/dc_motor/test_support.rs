//! Delta Line 16DC26N-G9401 datasheet values.

use uom::si::{
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance, Inductance, MomentOfInertia},
    inductance::millihenry,
    magnetic_flux::weber,
    moment_of_inertia::kilogram_square_meter,
};

use crate::support::units::{MotorConstant, RotationalDamping, RotationalDampingExt};

use super::{DcMotor, Dynamic, DynamicParameters, MotorParameters};

pub(super) const RESISTANCE_OHM: f64 = 1.25;
pub(super) const MOTOR_CONSTANT_WB: f64 = 4.45e-3;
pub(super) const DAMPING_NMS: f64 = 2.13e-7;
pub(super) const INERTIA_KG_M2: f64 = 1e-7;
pub(super) const INDUCTANCE_MH: f64 = 0.036;

pub(super) const NOMINAL_VOLTAGE_V: f64 = 6.0;

pub(super) const FREE_SPEED_RPM: f64 = 12_700.0;
pub(super) const FREE_CURRENT_MA: f64 = 63.9;

pub(super) const RATED_SPEED_RPM: f64 = 9_400.0;
pub(super) const RATED_TORQUE_MNM: f64 = 5.45;
pub(super) const RATED_CURRENT_A: f64 = 1.28;

pub(super) const STALL_TORQUE_MNM: f64 = 21.3;
pub(super) const STALL_CURRENT_A: f64 = 4.79;

pub(super) const PEAK_EFFICIENCY: f64 = 0.78;
pub(super) const TIME_CONSTANT_MS: f64 = 6.35;

pub(super) fn resistance() -> ElectricalResistance {
    ElectricalResistance::new::<ohm>(RESISTANCE_OHM)
}

pub(super) fn motor_constant() -> MotorConstant {
    MotorConstant::new::<weber>(MOTOR_CONSTANT_WB)
}

pub(super) fn nominal_voltage() -> ElectricPotential {
    ElectricPotential::new::<volt>(NOMINAL_VOLTAGE_V)
}

pub(super) fn reference_parameters() -> MotorParameters {
    MotorParameters::new(
        resistance(),
        RotationalDamping::from_newton_meter_seconds(DAMPING_NMS),
        motor_constant(),
    )
    .expect("datasheet parameters are valid")
}

pub(super) fn reference_dynamics() -> DynamicParameters {
    DynamicParameters::new(
        MomentOfInertia::new::<kilogram_square_meter>(INERTIA_KG_M2),
        Inductance::new::<millihenry>(INDUCTANCE_MH),
    )
    .expect("datasheet dynamics are valid")
}

pub(super) fn reference_motor() -> DcMotor {
    DcMotor::new(reference_parameters())
}

pub(super) fn reference_dynamic_motor() -> DcMotor<Dynamic> {
    reference_motor().with_dynamics(reference_dynamics())
}
