//! # Engcalc Models
//!
//! Numerical engines behind two small engineering calculators:
//!
//! - [`models::reliability::binomial`]: confidence level and required sample
//!   size for pass/fail reliability testing.
//! - [`models::electrical::dc_motor`]: steady-state behavior, time-domain
//!   simulation and derived characteristics of a brushed DC motor.
//!
//! The two calculators are independent of each other. Both are pure
//! computations over immutable inputs, so they can be called from any number
//! of threads without coordination.
//!
//! ## Crate layout
//!
//! - [`models`]: The calculators, each with a thin [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful
//! when building inputs for the models, but their APIs are not stable.

pub mod models;
pub mod support;
