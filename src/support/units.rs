//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical motor quantities (voltage, torque,
//! angular speed, ...). Two motor constants have no dedicated [`uom`] quantity,
//! so they are defined here.
//!
//! ## Motor constant
//!
//! In SI units the torque constant (N·m/A) and the back-EMF constant
//! (V·s/rad) of a brushed DC motor are the same number with the same
//! dimension, that of magnetic flux. [`MotorConstant`] is therefore
//! constructed with flux units:
//!
//! ```
//! use engcalc_models::support::units::MotorConstant;
//! use uom::si::magnetic_flux::weber;
//!
//! let k = MotorConstant::new::<weber>(4.45e-3);
//! assert_eq!(k.get::<weber>(), 4.45e-3);
//! ```
//!
//! ## Rotational damping
//!
//! Viscous damping (N·m per rad/s) shares its dimension with no [`uom`]
//! quantity that offers convenient units, so [`RotationalDampingExt`]
//! converts to and from SI values directly:
//!
//! ```
//! use engcalc_models::support::units::{RotationalDamping, RotationalDampingExt};
//!
//! let b = RotationalDamping::from_newton_meter_seconds(2.13e-7);
//! assert_eq!(b.newton_meter_seconds(), 2.13e-7);
//! ```

mod quantities;
mod rotational_damping;

pub use quantities::{MotorConstant, RotationalDamping};
pub use rotational_damping::RotationalDampingExt;
