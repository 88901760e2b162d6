//! Effectiveness-NTU toolkit.
//!
//! The effectiveness-NTU method relates heat exchanger performance to its
//! dimensionless thermal size (NTU = UA / `C_min`) and the capacity ratio of
//! the two streams.
//!
//! This toolkit provides:
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Ntu`],
//!   [`Effectiveness`]
//! - **Flow arrangements**: [`CounterFlow`], [`ParallelFlow`],
//!   [`ShellAndTube`], [`CrossFlowUnmixed`], [`CrossFlowCmaxMixed`],
//!   [`CrossFlowCminMixed`]
//! - **The configuration selector**: [`FlowConfiguration`], a closed
//!   six-way enum with strict string parsing and no implicit default
//!
//! # Example
//!
//! ```
//! use radiator_hx::support::constraint::ConstraintResult;
//! use radiator_hx::support::hx::{
//!     CapacitanceRate, CapacityRatio, EffectivenessRelation, FlowConfiguration, Ntu,
//! };
//! use uom::si::thermal_conductance::watt_per_kelvin;
//!
//! fn main() -> ConstraintResult<()> {
//!     let rates = (
//!         CapacitanceRate::new::<watt_per_kelvin>(2090.0)?,
//!         CapacitanceRate::new::<watt_per_kelvin>(4180.0)?,
//!     );
//!     let cr = CapacityRatio::from_capacitance_rates(rates.0, rates.1);
//!
//!     let _effectiveness = FlowConfiguration::CounterFlow.effectiveness(Ntu::new(1.5)?, cr);
//!     Ok(())
//! }
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod configuration;
mod effectiveness_ntu;

pub use arrangement::{
    CounterFlow, CrossFlowCmaxMixed, CrossFlowCminMixed, CrossFlowUnmixed, ParallelFlow,
    ShellAndTube,
};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use configuration::{FlowConfiguration, ParseFlowConfigurationError};
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
