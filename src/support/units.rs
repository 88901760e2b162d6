//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (temperature,
//! viscosity, pressure, power, and so on). This module provides extensions
//! that are useful for heat exchanger modeling but aren't included in
//! [`uom`].
//!
//! ## Temperature arithmetic
//!
//! [`uom`] deliberately restricts arithmetic on absolute temperatures, so
//! the [`TemperatureDifference`] trait supplies the two operations the
//! formulas need: [`minus`](TemperatureDifference::minus) for the interval
//! between two absolute temperatures, and
//! [`midpoint`](TemperatureDifference::midpoint) for the mean stream
//! temperature used on the natural-convection path.
//!
//! ## Extra quantities
//!
//! [`ThermalInsulance`] (m²·K/W) expresses fouling factors and per-area wall
//! resistance, the reciprocal dimension of a heat transfer coefficient.

mod quantities;
mod temperature_difference;

pub use quantities::ThermalInsulance;
pub use temperature_difference::TemperatureDifference;
