use uom::{
    ConstZero,
    si::{
        angular_velocity::radian_per_second,
        electric_current::ampere,
        electric_potential::volt,
        f64::{
            AngularVelocity, ElectricCurrent, ElectricPotential, Power, Ratio, Time, Torque,
        },
        power::watt,
        ratio::ratio,
        time::second,
        torque::newton_meter,
    },
};

use crate::support::constraint::{Constraint, UnitIntervalOpen};

use super::{DcMotor, Dynamic, MotorError, MotorState, OperatingPoint, steady_state::equilibrium};

/// Number of torque samples in a default characterisation sweep.
const CHARACTERISATION_SAMPLES: usize = 100;

/// One row of a torque–speed characterisation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicPoint {
    pub torque: Torque,
    pub speed: AngularVelocity,
    pub current: ElectricCurrent,
    pub power_electrical: Power,
    pub power_mechanical: Power,
    pub efficiency: Ratio,
}

/// Configuration for [`DcMotor::time_constant_mech_with`].
///
/// The step response is simulated over `window` using `samples` evenly
/// spaced points, and the time constant is the first sample whose speed
/// exceeds `threshold` times the peak speed in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeConstantConfig {
    pub window: Time,
    pub samples: usize,
    pub threshold: Ratio,
}

impl Default for TimeConstantConfig {
    fn default() -> Self {
        Self {
            window: Time::new::<second>(0.05),
            samples: 1000,
            threshold: Ratio::new::<ratio>(0.635),
        }
    }
}

impl<Dynamics> DcMotor<Dynamics> {
    /// Load torque at which the motor stalls, `K·V / R`.
    #[must_use]
    pub fn stall_torque(&self, voltage: ElectricPotential) -> Torque {
        let (r, _, k) = self.parameters.si();
        Torque::new::<newton_meter>(k * voltage.get::<volt>() / r)
    }

    /// Winding current at stall, `V / R`.
    #[must_use]
    pub fn stall_current(&self, voltage: ElectricPotential) -> ElectricCurrent {
        let (r, _, _) = self.parameters.si();
        ElectricCurrent::new::<ampere>(voltage.get::<volt>() / r)
    }

    /// No-load speed and current.
    #[must_use]
    pub fn free_run(&self, voltage: ElectricPotential) -> OperatingPoint {
        self.steady_state(voltage, Torque::ZERO)
    }

    /// Torque–speed table from zero torque to stall at a fixed voltage.
    ///
    /// Sweeps 100 evenly spaced load torques; see
    /// [`characterisation_with`](Self::characterisation_with).
    #[must_use]
    pub fn characterisation(&self, voltage: ElectricPotential) -> Vec<CharacteristicPoint> {
        self.characterisation_with(voltage, CHARACTERISATION_SAMPLES)
    }

    /// Torque–speed table with `samples` evenly spaced load torques.
    ///
    /// The sweep includes both zero torque and the stall torque. A single
    /// sample yields only the zero-torque point. Efficiency is reported as
    /// zero wherever no electrical power is drawn.
    #[must_use]
    pub fn characterisation_with(
        &self,
        voltage: ElectricPotential,
        samples: usize,
    ) -> Vec<CharacteristicPoint> {
        let v = voltage.get::<volt>();
        let stall = self.stall_torque(voltage).get::<newton_meter>();

        linspace(stall, samples)
            .map(|tau| {
                let (w, i) = equilibrium(&self.parameters, v, tau);
                let power_electrical = v * i;
                let power_mechanical = tau * w;
                let efficiency = if power_electrical == 0.0 {
                    0.0
                } else {
                    power_mechanical / power_electrical
                };

                CharacteristicPoint {
                    torque: Torque::new::<newton_meter>(tau),
                    speed: AngularVelocity::new::<radian_per_second>(w),
                    current: ElectricCurrent::new::<ampere>(i),
                    power_electrical: Power::new::<watt>(power_electrical),
                    power_mechanical: Power::new::<watt>(power_mechanical),
                    efficiency: Ratio::new::<ratio>(efficiency),
                }
            })
            .collect()
    }

    /// Highest efficiency in the default characterisation sweep.
    #[must_use]
    pub fn peak_efficiency(&self, voltage: ElectricPotential) -> Ratio {
        let peak = self
            .characterisation(voltage)
            .iter()
            .map(|point| point.efficiency.get::<ratio>())
            .fold(f64::NEG_INFINITY, f64::max);

        Ratio::new::<ratio>(peak)
    }
}

impl DcMotor<Dynamic> {
    /// Mechanical time constant of the unloaded step response from rest.
    ///
    /// Uses the default [`TimeConstantConfig`].
    ///
    /// # Errors
    ///
    /// See [`DcMotor::time_constant_mech_with`].
    pub fn time_constant_mech(&self, voltage: ElectricPotential) -> Result<Time, MotorError> {
        self.time_constant_mech_with(voltage, TimeConstantConfig::default())
    }

    /// Mechanical time constant with an explicit simulation window.
    ///
    /// Speeds are compared by magnitude, so a negative voltage step gives
    /// the same time constant as a positive one.
    ///
    /// # Errors
    ///
    /// - [`MotorError::NoSamples`] if `config.samples` is zero.
    /// - [`MotorError::InvalidThreshold`] if `config.threshold` is not
    ///   strictly between 0 and 1.
    /// - [`MotorError::InvalidTimeStep`] if the window is not finite and
    ///   strictly positive.
    /// - [`MotorError::NoStepResponse`] if the rotor does not move within
    ///   the window.
    #[allow(clippy::cast_precision_loss)]
    pub fn time_constant_mech_with(
        &self,
        voltage: ElectricPotential,
        config: TimeConstantConfig,
    ) -> Result<Time, MotorError> {
        if config.samples == 0 {
            return Err(MotorError::NoSamples);
        }
        if UnitIntervalOpen::check(&config.threshold).is_err() {
            return Err(MotorError::InvalidThreshold {
                threshold: config.threshold,
            });
        }

        let dt = config.window / config.samples as f64;
        let series = self.simulate(
            &vec![voltage; config.samples],
            &vec![Torque::ZERO; config.samples],
            dt,
            MotorState::rest(),
        )?;

        let speeds: Vec<f64> = series
            .iter()
            .map(|sample| sample.speed.get::<radian_per_second>().abs())
            .collect();
        let peak = speeds.iter().copied().fold(0.0, f64::max);
        if peak <= 0.0 {
            return Err(MotorError::NoStepResponse { voltage });
        }

        let threshold = config.threshold.get::<ratio>() * peak;
        speeds
            .iter()
            .position(|&speed| speed > threshold)
            .map(|k| series[k].time)
            .ok_or(MotorError::NoStepResponse { voltage })
    }
}

/// `samples` evenly spaced values from zero to `end`, both included.
#[allow(clippy::cast_precision_loss)]
fn linspace(end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let intervals = samples.saturating_sub(1).max(1) as f64;
    (0..samples).map(move |k| end * k as f64 / intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::millisecond;

    use crate::models::electrical::dc_motor::test_support::{
        PEAK_EFFICIENCY, STALL_CURRENT_A, STALL_TORQUE_MNM, TIME_CONSTANT_MS, nominal_voltage,
        reference_dynamic_motor, reference_motor,
    };

    #[test]
    fn stall_matches_datasheet() {
        let motor = reference_motor();

        assert_relative_eq!(
            motor.stall_torque(nominal_voltage()).get::<newton_meter>(),
            STALL_TORQUE_MNM * 1e-3,
            max_relative = 0.01
        );
        assert_relative_eq!(
            motor.stall_current(nominal_voltage()).get::<ampere>(),
            STALL_CURRENT_A,
            max_relative = 0.01
        );
    }

    #[test]
    fn no_speed_at_stall() {
        let motor = reference_motor();
        let point = motor.steady_state(nominal_voltage(), motor.stall_torque(nominal_voltage()));

        assert_relative_eq!(point.speed.get::<radian_per_second>(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            point.current.get::<ampere>(),
            motor.stall_current(nominal_voltage()).get::<ampere>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn free_run_is_unloaded_steady_state() {
        let motor = reference_motor();
        assert_eq!(
            motor.free_run(nominal_voltage()),
            motor.steady_state(nominal_voltage(), Torque::new::<newton_meter>(0.0))
        );
    }

    #[test]
    fn sweep_spans_zero_to_stall() {
        let motor = reference_motor();
        let table = motor.characterisation(nominal_voltage());

        assert_eq!(table.len(), 100);
        assert_relative_eq!(table[0].torque.get::<newton_meter>(), 0.0);
        assert_relative_eq!(
            table[99].torque.get::<newton_meter>(),
            motor.stall_torque(nominal_voltage()).get::<newton_meter>(),
            max_relative = 1e-12
        );
        assert!(table.windows(2).all(|w| w[1].speed < w[0].speed));
    }

    #[test]
    fn efficiency_peaks_near_datasheet() {
        let motor = reference_motor();
        assert_relative_eq!(
            motor.peak_efficiency(nominal_voltage()).get::<ratio>(),
            PEAK_EFFICIENCY,
            epsilon = 0.02
        );
    }

    #[test]
    fn efficiency_endpoints() {
        let motor = reference_motor();
        let table = motor.characterisation(nominal_voltage());

        // No shaft power at either end of the sweep.
        assert_relative_eq!(table[0].efficiency.get::<ratio>(), 0.0);
        assert_relative_eq!(table[99].efficiency.get::<ratio>(), 0.0, epsilon = 1e-9);

        let idle = motor.characterisation_with(ElectricPotential::new::<volt>(0.0), 3);
        assert!(idle.iter().all(|p| p.efficiency.get::<ratio>() == 0.0));
    }

    #[test]
    fn powers_are_consistent() {
        let motor = reference_motor();
        for point in motor.characterisation_with(nominal_voltage(), 7) {
            assert_relative_eq!(
                point.power_electrical.get::<watt>(),
                nominal_voltage().get::<volt>() * point.current.get::<ampere>(),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                point.power_mechanical.get::<watt>(),
                point.torque.get::<newton_meter>() * point.speed.get::<radian_per_second>(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn degenerate_sweeps() {
        let motor = reference_motor();
        assert!(motor.characterisation_with(nominal_voltage(), 0).is_empty());

        let single = motor.characterisation_with(nominal_voltage(), 1);
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single[0].torque.get::<newton_meter>(), 0.0);
    }

    #[test]
    fn time_constant_matches_datasheet() {
        let motor = reference_dynamic_motor();
        let tau = motor.time_constant_mech(nominal_voltage()).unwrap();

        assert_relative_eq!(tau.get::<millisecond>(), TIME_CONSTANT_MS, epsilon = 1.0);
    }

    #[test]
    fn time_constant_ignores_direction() {
        let motor = reference_dynamic_motor();
        let forward = motor.time_constant_mech(nominal_voltage()).unwrap();
        let reverse = motor.time_constant_mech(-nominal_voltage()).unwrap();

        assert_relative_eq!(
            forward.get::<second>(),
            reverse.get::<second>(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn zero_voltage_has_no_time_constant() {
        let motor = reference_dynamic_motor();
        let voltage = ElectricPotential::new::<volt>(0.0);

        assert_eq!(
            motor.time_constant_mech(voltage),
            Err(MotorError::NoStepResponse { voltage })
        );
    }

    #[test]
    fn empty_window_is_rejected() {
        let motor = reference_dynamic_motor();
        let config = TimeConstantConfig {
            window: Time::new::<second>(0.0),
            ..TimeConstantConfig::default()
        };

        assert!(matches!(
            motor.time_constant_mech_with(nominal_voltage(), config),
            Err(MotorError::InvalidTimeStep { .. })
        ));

        let unbounded = TimeConstantConfig {
            window: Time::new::<second>(f64::INFINITY),
            ..TimeConstantConfig::default()
        };
        assert!(matches!(
            motor.time_constant_mech_with(nominal_voltage(), unbounded),
            Err(MotorError::InvalidTimeStep { .. })
        ));
    }

    #[test]
    fn threshold_must_be_a_fraction_of_peak() {
        let motor = reference_dynamic_motor();

        for value in [0.0, 1.0, 1.5] {
            let threshold = Ratio::new::<ratio>(value);
            let config = TimeConstantConfig {
                threshold,
                ..TimeConstantConfig::default()
            };
            assert_eq!(
                motor.time_constant_mech_with(nominal_voltage(), config),
                Err(MotorError::InvalidThreshold { threshold })
            );
        }
    }

    #[test]
    fn sampleless_window_is_rejected() {
        let motor = reference_dynamic_motor();
        let config = TimeConstantConfig {
            samples: 0,
            ..TimeConstantConfig::default()
        };

        assert_eq!(
            motor.time_constant_mech_with(nominal_voltage(), config),
            Err(MotorError::NoSamples)
        );
    }
}
