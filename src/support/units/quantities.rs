use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Motor torque / back-EMF constant, N·m/A ≡ V·s/rad ≡ Wb in SI.
pub type MotorConstant = Quantity<ISQ<P2, P1, N2, N1, Z0, Z0, Z0>, SI<f64>, f64>;

/// Rotational viscous damping, N·m·s/rad in SI.
pub type RotationalDamping = Quantity<ISQ<P2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
