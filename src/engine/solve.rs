use std::cmp::Ordering;

use num_traits::Zero;
use uom::{
    ConstZero,
    si::{
        f64::{HeatTransfer, Length, Power, Pressure, Ratio, ThermodynamicTemperature},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    convection::{self, NU_LAMINAR, TurbulentCorrelation},
    flow::{self, FlowRegime, Reynolds},
    hx::{CapacitanceRate, CapacityRatio, EffectivenessRelation, Ntu},
    units::{TemperatureDifference, ThermalInsulance},
};

use super::{
    CalculationInput, CalculationResults, EngineError, Environment, FoulingFactors, Side,
    SidePair, StreamInput, TubeGeometry,
};

/// Input field paths used in error reporting for one stream.
struct StreamFields {
    mass_flow: &'static str,
    velocity: &'static str,
    density: &'static str,
    viscosity: &'static str,
    specific_heat: &'static str,
    thermal_conductivity: &'static str,
    wall_viscosity: &'static str,
    reynolds: &'static str,
    mean_temperature: &'static str,
}

const HOT_FIELDS: StreamFields = StreamFields {
    mass_flow: "hot.mass_flow",
    velocity: "hot.velocity",
    density: "hot.density",
    viscosity: "hot.viscosity",
    specific_heat: "hot.specific_heat",
    thermal_conductivity: "hot.thermal_conductivity",
    wall_viscosity: "hot.wall_viscosity",
    reynolds: "hot.reynolds",
    mean_temperature: "hot.mean_temperature",
};

const COLD_FIELDS: StreamFields = StreamFields {
    mass_flow: "cold.mass_flow",
    velocity: "cold.velocity",
    density: "cold.density",
    viscosity: "cold.viscosity",
    specific_heat: "cold.specific_heat",
    thermal_conductivity: "cold.thermal_conductivity",
    wall_viscosity: "cold.wall_viscosity",
    reynolds: "cold.reynolds",
    mean_temperature: "cold.mean_temperature",
};

const fn fields_for(side: Side) -> &'static StreamFields {
    match side {
        Side::Hot => &HOT_FIELDS,
        Side::Cold => &COLD_FIELDS,
    }
}

pub(super) fn solve(input: &CalculationInput) -> Result<CalculationResults, EngineError> {
    validate(input)?;

    let geometry = &input.geometry;

    let hot = analyze_stream(
        Side::Hot,
        &input.hot,
        geometry.outer_diameter,
        input.correlations.hot,
        geometry,
        input.wall_temperature,
        &input.environment,
    )?;
    let cold = analyze_stream(
        Side::Cold,
        &input.cold,
        geometry.inner_diameter,
        input.correlations.cold,
        geometry,
        input.wall_temperature,
        &input.environment,
    )?;

    let overall_coefficient = match &input.fouling {
        None => convection::overall_coefficient(hot.film_coefficient, cold.film_coefficient),
        Some(fouling) => convection::overall_coefficient_with_resistances(
            hot.film_coefficient,
            cold.film_coefficient,
            series_resistance(fouling, geometry),
        ),
    };

    let c_hot =
        CapacitanceRate::from_mass_flow_and_specific_heat(input.hot.mass_flow, input.hot.specific_heat)
            .expect("validated mass flow and specific heat should yield a capacitance rate");
    let c_cold = CapacitanceRate::from_mass_flow_and_specific_heat(
        input.cold.mass_flow,
        input.cold.specific_heat,
    )
    .expect("validated mass flow and specific heat should yield a capacitance rate");

    let c_min = c_hot.min(c_cold);
    let capacity_ratio = CapacityRatio::from_capacitance_rates(c_hot, c_cold);
    let ntu = Ntu::from_conductance(overall_coefficient * geometry.surface_area, c_min)
        .expect("a positive conductance and capacitance rate should yield a valid NTU");

    let effectiveness = input.configuration.effectiveness(ntu, capacity_ratio);

    let max_heat_transfer_rate =
        *c_min * input.hot.inlet_temperature.minus(input.cold.inlet_temperature);
    if max_heat_transfer_rate.partial_cmp(&Power::ZERO) != Some(Ordering::Greater) {
        return Err(EngineError::NoDrivingTemperatureDifference {
            hot_inlet_kelvin: input.hot.inlet_temperature.get::<kelvin>(),
            cold_inlet_kelvin: input.cold.inlet_temperature.get::<kelvin>(),
        });
    }
    let heat_transfer_rate = *effectiveness * max_heat_transfer_rate;

    Ok(CalculationResults {
        reynolds: SidePair {
            hot: *hot.reynolds,
            cold: *cold.reynolds,
        },
        prandtl: SidePair {
            hot: hot.prandtl,
            cold: cold.prandtl,
        },
        grashof: SidePair {
            hot: hot.grashof,
            cold: cold.grashof,
        },
        rayleigh: SidePair {
            hot: hot.rayleigh,
            cold: cold.rayleigh,
        },
        nusselt: SidePair {
            hot: hot.nusselt,
            cold: cold.nusselt,
        },
        film_coefficient: SidePair {
            hot: hot.film_coefficient,
            cold: cold.film_coefficient,
        },
        overall_coefficient,
        capacitance_rate: SidePair {
            hot: *c_hot,
            cold: *c_cold,
        },
        capacity_ratio: *capacity_ratio,
        ntu: *ntu,
        effectiveness: *effectiveness,
        heat_transfer_rate,
        max_heat_transfer_rate,
        pressure_drop: SidePair {
            hot: hot.pressure_drop,
            cold: cold.pressure_drop,
        },
        flow_regime: SidePair {
            hot: hot.regime,
            cold: cold.regime,
        },
        configuration: input.configuration,
        reynolds_thresholds: input.environment.reynolds_thresholds,
    })
}

/// Everything the pipeline derives for a single stream.
struct StreamAnalysis {
    reynolds: Reynolds,
    regime: FlowRegime,
    prandtl: Ratio,
    grashof: Ratio,
    rayleigh: Ratio,
    nusselt: Ratio,
    film_coefficient: HeatTransfer,
    pressure_drop: Pressure,
}

fn analyze_stream(
    side: Side,
    stream: &StreamInput,
    diameter: Length,
    correlation: TurbulentCorrelation,
    geometry: &TubeGeometry,
    wall_temperature: ThermodynamicTemperature,
    environment: &Environment,
) -> Result<StreamAnalysis, EngineError> {
    let fields = fields_for(side);

    let reynolds =
        Reynolds::from_velocity(stream.density, stream.velocity, diameter, stream.viscosity)
            .map_err(|source| EngineError::InvalidInput {
                field: fields.reynolds,
                source,
            })?;
    let regime = environment.reynolds_thresholds.classify(reynolds);

    let prandtl = convection::prandtl(
        stream.viscosity,
        stream.specific_heat,
        stream.thermal_conductivity,
    );

    let mean_temperature = stream
        .inlet_temperature
        .midpoint(stream.outlet_temperature);
    let beta = convection::thermal_expansion(mean_temperature).map_err(|source| match source {
        ConstraintError::NotANumber => EngineError::InvalidInput {
            field: fields.mean_temperature,
            source,
        },
        _ => EngineError::NonPhysicalMeanTemperature { side },
    })?;
    let grashof = convection::grashof(
        beta,
        environment.gravity,
        wall_temperature.minus(mean_temperature),
        stream.density,
        geometry.length,
        stream.viscosity,
    );
    let rayleigh = convection::rayleigh(grashof, prandtl);

    let nusselt = match regime {
        FlowRegime::Laminar => Ratio::new::<ratio>(NU_LAMINAR),
        FlowRegime::Transitional | FlowRegime::Turbulent => {
            let viscosity_ratio = match stream.wall_viscosity {
                Some(wall_viscosity) => stream.viscosity / wall_viscosity,
                None => Ratio::new::<ratio>(1.0),
            };
            correlation.nusselt(reynolds, prandtl, viscosity_ratio)
        }
    };
    let film_coefficient =
        convection::film_coefficient(nusselt, stream.thermal_conductivity, diameter);

    let friction_factor = flow::friction_factor(reynolds, regime);
    let pressure_drop = flow::pressure_drop(
        friction_factor,
        geometry.length,
        diameter,
        stream.density,
        stream.velocity,
    );

    Ok(StreamAnalysis {
        reynolds,
        regime,
        prandtl,
        grashof,
        rayleigh,
        nusselt,
        film_coefficient,
        pressure_drop,
    })
}

/// Sum of the optional fouling and plane-wall resistances.
fn series_resistance(fouling: &FoulingFactors, geometry: &TubeGeometry) -> ThermalInsulance {
    let wall = match fouling.tube_conductivity {
        Some(conductivity) => {
            let thickness = (geometry.outer_diameter - geometry.inner_diameter) / 2.0;
            thickness / conductivity
        }
        None => ThermalInsulance::ZERO,
    };
    fouling.hot + fouling.cold + wall
}

fn validate(input: &CalculationInput) -> Result<(), EngineError> {
    validate_stream(&input.hot, &HOT_FIELDS)?;
    validate_stream(&input.cold, &COLD_FIELDS)?;

    let geometry = &input.geometry;
    check_positive("geometry.outer_diameter", geometry.outer_diameter)?;
    check_positive("geometry.inner_diameter", geometry.inner_diameter)?;
    check_positive("geometry.length", geometry.length)?;
    check_positive("geometry.tube_count", geometry.tube_count)?;
    check_positive("geometry.surface_area", geometry.surface_area)?;
    check_positive("environment.gravity", input.environment.gravity)?;

    if !input.wall_temperature.get::<kelvin>().is_finite() {
        return Err(EngineError::InvalidInput {
            field: "wall_temperature",
            source: ConstraintError::NotANumber,
        });
    }

    if let Some(fouling) = &input.fouling {
        check_non_negative("fouling.hot", fouling.hot)?;
        check_non_negative("fouling.cold", fouling.cold)?;
        if let Some(conductivity) = fouling.tube_conductivity {
            check_positive("fouling.tube_conductivity", conductivity)?;
            check_positive(
                "geometry.wall_thickness",
                geometry.outer_diameter - geometry.inner_diameter,
            )?;
        }
    }

    Ok(())
}

fn validate_stream(stream: &StreamInput, fields: &StreamFields) -> Result<(), EngineError> {
    check_positive(fields.mass_flow, stream.mass_flow)?;
    check_positive(fields.velocity, stream.velocity)?;
    check_positive(fields.density, stream.density)?;
    check_positive(fields.viscosity, stream.viscosity)?;
    check_positive(fields.specific_heat, stream.specific_heat)?;
    check_positive(fields.thermal_conductivity, stream.thermal_conductivity)?;
    if let Some(wall_viscosity) = stream.wall_viscosity {
        check_positive(fields.wall_viscosity, wall_viscosity)?;
    }
    Ok(())
}

fn check_positive<T: PartialOrd + Zero>(
    field: &'static str,
    value: T,
) -> Result<(), EngineError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|source| EngineError::InvalidInput { field, source })
}

fn check_non_negative<T: PartialOrd + Zero>(
    field: &'static str,
    value: T,
) -> Result<(), EngineError> {
    NonNegative::new(value)
        .map(|_| ())
        .map_err(|source| EngineError::InvalidInput { field, source })
}
