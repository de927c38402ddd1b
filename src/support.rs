//! Supporting utilities shared by the models.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`units`]: Quantities missing from [`uom`] that motor modeling needs.

pub mod constraint;
pub mod units;
