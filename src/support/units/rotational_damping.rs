use std::marker::PhantomData;

use super::RotationalDamping;

/// Extension trait for building and reading [`RotationalDamping`] values.
///
/// [`uom`] only provides `new`/`get` for quantities it defines itself, so
/// this trait works with the SI base value directly.
pub trait RotationalDampingExt {
    /// Creates a damping constant from a value in N·m·s/rad.
    fn from_newton_meter_seconds(value: f64) -> Self;

    /// Returns the damping constant in N·m·s/rad.
    fn newton_meter_seconds(&self) -> f64;
}

impl RotationalDampingExt for RotationalDamping {
    fn from_newton_meter_seconds(value: f64) -> Self {
        RotationalDamping {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn newton_meter_seconds(&self) -> f64 {
        self.value
    }
}
