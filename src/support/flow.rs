//! Flow-state derivation.
//!
//! This module computes the [Reynolds number](Reynolds) of a stream (from
//! either velocity or mass flow), classifies its [flow regime](FlowRegime)
//! against injected [critical values](ReynoldsThresholds), and provides the
//! friction factor and Darcy-Weisbach pressure drop that depend on the
//! regime.

mod friction;
mod regime;
mod reynolds;

pub use friction::{friction_factor, pressure_drop};
pub use regime::{FlowRegime, ReynoldsThresholds};
pub use reynolds::Reynolds;
