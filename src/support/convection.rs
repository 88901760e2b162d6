//! Convective heat transfer building blocks.
//!
//! This module computes the fluid-property groups (Prandtl, Grashof,
//! Rayleigh), the Nusselt number correlations for laminar and
//! turbulent/transitional flow, and the film and overall heat transfer
//! coefficients derived from them.

mod dimensionless;
mod film;
mod nusselt;

pub use dimensionless::{grashof, prandtl, rayleigh, thermal_expansion};
pub use film::{film_coefficient, overall_coefficient, overall_coefficient_with_resistances};
pub use nusselt::{NU_LAMINAR, TurbulentCorrelation};
