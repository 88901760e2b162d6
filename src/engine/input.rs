use crate::support::{
    convection::TurbulentCorrelation, flow::ReynoldsThresholds, hx::FlowConfiguration,
    units::ThermalInsulance,
};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{
        Acceleration, Area, DynamicViscosity, Length, MassDensity, MassRate,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
};

use super::SidePair;

/// Complete parameter set for one calculation.
///
/// The record is plain data; validation happens once at the engine boundary
/// when it is passed to [`calculate`](super::calculate). The caller must not
/// rely on any field defaulting: in particular [`configuration`] is
/// required, and string identifiers should be parsed into
/// [`FlowConfiguration`] before a record is built.
///
/// [`configuration`]: CalculationInput::configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationInput {
    /// Hot-stream conditions and thermophysical properties.
    pub hot: StreamInput,
    /// Cold-stream conditions and thermophysical properties.
    pub cold: StreamInput,
    /// Wall temperature used for the natural-convection numbers.
    pub wall_temperature: ThermodynamicTemperature,
    /// Tube-bank geometry.
    pub geometry: TubeGeometry,
    /// Flow configuration of the exchanger.
    pub configuration: FlowConfiguration,
    /// Turbulent Nusselt correlation applied to each stream.
    pub correlations: SidePair<TurbulentCorrelation>,
    /// Environment constants.
    pub environment: Environment,
    /// Optional fouling and tube-wall resistance terms. When present, the
    /// overall coefficient uses the resistance-augmented series form; when
    /// absent, the baseline two-film form.
    pub fouling: Option<FoulingFactors>,
}

/// Conditions and thermophysical properties of one stream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamInput {
    pub inlet_temperature: ThermodynamicTemperature,
    pub outlet_temperature: ThermodynamicTemperature,
    pub mass_flow: MassRate,
    pub velocity: Velocity,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
    /// Dynamic viscosity evaluated at the wall temperature, used by the
    /// Churchill-Bernstein viscosity-ratio correction. The correction
    /// factor defaults to 1 when this is `None`.
    pub wall_viscosity: Option<DynamicViscosity>,
}

/// Tube-bank geometry of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TubeGeometry {
    /// External tube diameter; characteristic length of the hot stream.
    pub outer_diameter: Length,
    /// Internal tube diameter; characteristic length of the cold stream.
    pub inner_diameter: Length,
    /// Tube length, also the characteristic length for natural convection.
    pub length: Length,
    /// Number of tubes in the bank.
    pub tube_count: u32,
    /// Total heat transfer surface area.
    pub surface_area: Area,
}

/// Environment constants, injected rather than hard-coded in the formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Gravitational acceleration.
    pub gravity: Acceleration,
    /// Critical Reynolds numbers used for regime classification.
    pub reynolds_thresholds: ReynoldsThresholds,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            reynolds_thresholds: ReynoldsThresholds::default(),
        }
    }
}

/// Fouling and tube-wall resistance terms for the overall coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoulingFactors {
    /// Hot-side fouling resistance.
    pub hot: ThermalInsulance,
    /// Cold-side fouling resistance.
    pub cold: ThermalInsulance,
    /// Tube material conductivity. When given, a plane-wall resistance
    /// `(D_ext − D_int)/2 / k` joins the series; when `None`, the wall is
    /// treated as thermally thin.
    pub tube_conductivity: Option<ThermalConductivity>,
}

/// The original tube-bank reading: the hot stream washes the tube exterior
/// and the cold stream runs inside, so they default to different
/// correlations.
impl Default for SidePair<TurbulentCorrelation> {
    fn default() -> Self {
        Self {
            hot: TurbulentCorrelation::ChurchillBernstein,
            cold: TurbulentCorrelation::ExternalCylinder,
        }
    }
}
