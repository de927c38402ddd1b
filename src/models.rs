//! Public calculator models.
//!
//! # Organization
//!
//! Models are grouped by domain:
//!
//! - [`reliability`]: Statistics for pass/fail reliability testing.
//! - [`electrical`]: Electromechanical machines.
//!
//! # Model structure
//!
//! Each model exposes plain functions or methods for direct use, plus a
//! [`twine_core::Model`] implementation acting as a thin adapter over the
//! same computation so models compose with Twine solvers.

pub mod electrical;
pub mod reliability;
