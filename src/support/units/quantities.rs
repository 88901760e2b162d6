use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal insulance (area thermal resistance), m²·K/W in SI.
///
/// The reciprocal dimension of a heat transfer coefficient. Used for fouling
/// factors and the per-area wall resistance term in the overall coefficient.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;
