use crate::support::{
    flow::{FlowRegime, ReynoldsThresholds},
    hx::FlowConfiguration,
};
use uom::si::f64::{HeatTransfer, Power, Pressure, Ratio, ThermalConductance};

use super::SidePair;

/// Results of one calculation, mirroring the derivation pipeline.
///
/// The record is plain data, created once per invocation and never mutated.
/// Every value is finite; inputs that would produce `NaN` or infinity are
/// rejected before a record is built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResults {
    /// Reynolds number of each stream.
    pub reynolds: SidePair<Ratio>,
    /// Prandtl number of each stream.
    pub prandtl: SidePair<Ratio>,
    /// Grashof number of each stream.
    pub grashof: SidePair<Ratio>,
    /// Rayleigh number of each stream.
    pub rayleigh: SidePair<Ratio>,
    /// Nusselt number of each stream.
    pub nusselt: SidePair<Ratio>,
    /// Film heat transfer coefficient of each stream.
    pub film_coefficient: SidePair<HeatTransfer>,
    /// Overall heat transfer coefficient.
    pub overall_coefficient: HeatTransfer,
    /// Capacitance rate (`ṁ·cp`) of each stream.
    pub capacitance_rate: SidePair<ThermalConductance>,
    /// Capacity ratio `C_min/C_max`.
    pub capacity_ratio: Ratio,
    /// Number of transfer units `UA/C_min`.
    pub ntu: Ratio,
    /// Exchanger effectiveness, in [0, 1].
    pub effectiveness: Ratio,
    /// Actual heat transfer rate, `ε·Q_max`.
    pub heat_transfer_rate: Power,
    /// Maximum possible heat transfer rate, `C_min·(T_hot,in − T_cold,in)`.
    pub max_heat_transfer_rate: Power,
    /// Darcy-Weisbach pressure drop of each stream.
    pub pressure_drop: SidePair<Pressure>,
    /// Flow regime classification of each stream.
    pub flow_regime: SidePair<FlowRegime>,
    /// The flow configuration the effectiveness was computed for.
    pub configuration: FlowConfiguration,
    /// The critical Reynolds numbers used for classification, recorded for
    /// traceability.
    pub reynolds_thresholds: ReynoldsThresholds,
}
