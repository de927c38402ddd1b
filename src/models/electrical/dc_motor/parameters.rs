use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    electric_current::ampere,
    electrical_resistance::ohm,
    f64::{AngularVelocity, ElectricCurrent, ElectricalResistance, Inductance, MomentOfInertia},
    inductance::henry,
    magnetic_flux::weber,
    moment_of_inertia::kilogram_square_meter,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::{MotorConstant, RotationalDamping, RotationalDampingExt},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotorParametersError {
    #[error("invalid winding resistance: {resistance:?}")]
    Resistance { resistance: ElectricalResistance },
    #[error("invalid damping constant: {damping:?}")]
    Damping { damping: RotationalDamping },
    #[error("invalid motor constant: {motor_constant:?}")]
    MotorConstant { motor_constant: MotorConstant },
    #[error("invalid rotor inertia: {inertia:?}")]
    Inertia { inertia: MomentOfInertia },
    #[error("invalid winding inductance: {inductance:?}")]
    Inductance { inductance: Inductance },
    #[error("invalid free-run speed: {free_speed:?}")]
    FreeSpeed { free_speed: AngularVelocity },
}

/// Parameters every brushed DC motor model needs.
///
/// These are enough for steady-state analysis. Rotor inertia and winding
/// inductance, needed for dynamics, live in [`DynamicParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorParameters {
    resistance: ElectricalResistance,
    damping: RotationalDamping,
    motor_constant: MotorConstant,
}

impl MotorParameters {
    /// Creates validated motor parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MotorParametersError`] if the resistance or motor constant
    /// is not strictly positive, or if the damping constant is negative.
    pub fn new(
        resistance: ElectricalResistance,
        damping: RotationalDamping,
        motor_constant: MotorConstant,
    ) -> Result<Self, MotorParametersError> {
        if StrictlyPositive::check(&resistance).is_err() {
            return Err(MotorParametersError::Resistance { resistance });
        }
        if NonNegative::check(&damping).is_err() {
            return Err(MotorParametersError::Damping { damping });
        }
        if StrictlyPositive::check(&motor_constant).is_err() {
            return Err(MotorParametersError::MotorConstant { motor_constant });
        }

        Ok(Self {
            resistance,
            damping,
            motor_constant,
        })
    }

    /// Creates motor parameters with the damping constant derived from a
    /// no-load test point.
    ///
    /// At steady state with no load torque the mechanical balance gives
    /// `K·i_free = b·ω_free`, so `b = K·i_free / ω_free` regardless of the
    /// supply voltage.
    ///
    /// # Errors
    ///
    /// Returns [`MotorParametersError::FreeSpeed`] if the free-run speed is not
    /// strictly positive, or any error from [`MotorParameters::new`].
    pub fn from_free_run(
        free_current: ElectricCurrent,
        free_speed: AngularVelocity,
        resistance: ElectricalResistance,
        motor_constant: MotorConstant,
    ) -> Result<Self, MotorParametersError> {
        if StrictlyPositive::check(&free_speed.get::<radian_per_second>()).is_err() {
            return Err(MotorParametersError::FreeSpeed { free_speed });
        }

        let damping = RotationalDamping::from_newton_meter_seconds(
            motor_constant.get::<weber>() * free_current.get::<ampere>()
                / free_speed.get::<radian_per_second>(),
        );

        Self::new(resistance, damping, motor_constant)
    }

    /// Winding resistance `R`.
    #[must_use]
    pub fn resistance(&self) -> ElectricalResistance {
        self.resistance
    }

    /// Viscous damping constant `b`.
    #[must_use]
    pub fn damping(&self) -> RotationalDamping {
        self.damping
    }

    /// Combined torque and back-EMF constant `K`.
    #[must_use]
    pub fn motor_constant(&self) -> MotorConstant {
        self.motor_constant
    }

    /// Returns `(R, b, K)` as SI values.
    pub(super) fn si(&self) -> (f64, f64, f64) {
        (
            self.resistance.get::<ohm>(),
            self.damping.newton_meter_seconds(),
            self.motor_constant.get::<weber>(),
        )
    }
}

/// Rotor inertia and winding inductance, which enable dynamic simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicParameters {
    inertia: MomentOfInertia,
    inductance: Inductance,
}

impl DynamicParameters {
    /// Creates validated dynamic parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MotorParametersError`] if either value is not strictly positive.
    pub fn new(
        inertia: MomentOfInertia,
        inductance: Inductance,
    ) -> Result<Self, MotorParametersError> {
        if StrictlyPositive::check(&inertia).is_err() {
            return Err(MotorParametersError::Inertia { inertia });
        }
        if StrictlyPositive::check(&inductance).is_err() {
            return Err(MotorParametersError::Inductance { inductance });
        }

        Ok(Self {
            inertia,
            inductance,
        })
    }

    /// Rotor inertia `J`.
    #[must_use]
    pub fn inertia(&self) -> MomentOfInertia {
        self.inertia
    }

    /// Winding inductance `L`.
    #[must_use]
    pub fn inductance(&self) -> Inductance {
        self.inductance
    }

    /// Returns `(J, L)` as SI values.
    pub(super) fn si(&self) -> (f64, f64) {
        (
            self.inertia.get::<kilogram_square_meter>(),
            self.inductance.get::<henry>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::revolution_per_minute, electric_current::milliampere};

    use crate::models::electrical::dc_motor::test_support::{
        FREE_CURRENT_MA, FREE_SPEED_RPM, RESISTANCE_OHM, motor_constant, reference_parameters,
        resistance,
    };

    #[test]
    fn free_run_damping_is_exact() {
        let free_current = ElectricCurrent::new::<milliampere>(FREE_CURRENT_MA);
        let free_speed = AngularVelocity::new::<revolution_per_minute>(FREE_SPEED_RPM);

        let parameters =
            MotorParameters::from_free_run(free_current, free_speed, resistance(), motor_constant())
                .unwrap();

        let expected = motor_constant().get::<weber>() * free_current.get::<ampere>()
            / free_speed.get::<radian_per_second>();
        assert_eq!(parameters.damping().newton_meter_seconds(), expected);
        assert_relative_eq!(parameters.resistance().get::<ohm>(), RESISTANCE_OHM);
    }

    #[test]
    fn free_run_damping_matches_datasheet() {
        let parameters = MotorParameters::from_free_run(
            ElectricCurrent::new::<milliampere>(FREE_CURRENT_MA),
            AngularVelocity::new::<revolution_per_minute>(FREE_SPEED_RPM),
            resistance(),
            motor_constant(),
        )
        .unwrap();

        assert_relative_eq!(
            parameters.damping().newton_meter_seconds(),
            reference_parameters().damping().newton_meter_seconds(),
            max_relative = 0.01
        );
    }

    #[test]
    fn free_run_requires_positive_speed() {
        let free_speed = AngularVelocity::new::<radian_per_second>(0.0);
        assert_eq!(
            MotorParameters::from_free_run(
                ElectricCurrent::new::<ampere>(0.06),
                free_speed,
                resistance(),
                motor_constant(),
            ),
            Err(MotorParametersError::FreeSpeed { free_speed })
        );
    }

    #[test]
    fn rejects_non_physical_parameters() {
        let zero_resistance = ElectricalResistance::new::<ohm>(0.0);
        assert!(matches!(
            MotorParameters::new(
                zero_resistance,
                RotationalDamping::from_newton_meter_seconds(1e-7),
                motor_constant()
            ),
            Err(MotorParametersError::Resistance { .. })
        ));

        assert!(matches!(
            MotorParameters::new(
                resistance(),
                RotationalDamping::from_newton_meter_seconds(-1e-7),
                motor_constant()
            ),
            Err(MotorParametersError::Damping { .. })
        ));

        assert!(matches!(
            MotorParameters::new(
                resistance(),
                RotationalDamping::from_newton_meter_seconds(1e-7),
                MotorConstant::new::<weber>(f64::NAN)
            ),
            Err(MotorParametersError::MotorConstant { .. })
        ));
    }

    #[test]
    fn undamped_motor_is_allowed() {
        assert!(
            MotorParameters::new(
                resistance(),
                RotationalDamping::from_newton_meter_seconds(0.0),
                motor_constant()
            )
            .is_ok()
        );
    }

    #[test]
    fn dynamic_parameters_must_be_positive() {
        let inertia = MomentOfInertia::new::<kilogram_square_meter>(1e-7);
        let inductance = Inductance::new::<henry>(0.0);

        assert_eq!(
            DynamicParameters::new(inertia, inductance),
            Err(MotorParametersError::Inductance { inductance })
        );
        assert!(matches!(
            DynamicParameters::new(MomentOfInertia::new::<kilogram_square_meter>(-1.0), inductance),
            Err(MotorParametersError::Inertia { .. })
        ));
    }
}
