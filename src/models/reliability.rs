//! Reliability statistics models.

pub mod binomial;
