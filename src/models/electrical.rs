//! Electromechanical machine models.

pub mod dc_motor;
