use crate::support::constraint::{ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{
        Acceleration, DynamicViscosity, Length, MassDensity, Ratio, SpecificHeatCapacity,
        TemperatureCoefficient, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    temperature_coefficient::per_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Prandtl number, `Pr = μ·Cp/λ`.
///
/// The thermal conductivity must be non-zero; callers validate their
/// property set before reaching the formulas.
#[must_use]
pub fn prandtl(
    viscosity: DynamicViscosity,
    specific_heat: SpecificHeatCapacity,
    thermal_conductivity: ThermalConductivity,
) -> Ratio {
    viscosity * specific_heat / thermal_conductivity
}

/// Volumetric thermal expansion coefficient of an ideal fluid, `β = 1/T`.
///
/// The temperature is interpreted on the absolute (kelvin) scale, which the
/// [`ThermodynamicTemperature`] type guarantees regardless of the unit the
/// caller constructed it in.
///
/// # Errors
///
/// Returns `Err` if the temperature is at or below absolute zero.
pub fn thermal_expansion(
    temperature: ThermodynamicTemperature,
) -> ConstraintResult<TemperatureCoefficient> {
    let kelvin_value = StrictlyPositive::new(temperature.get::<kelvin>())?;
    Ok(TemperatureCoefficient::new::<per_kelvin>(
        kelvin_value.into_inner().recip(),
    ))
}

/// Grashof number for natural convection along a surface of length `L`,
/// `Gr = β·g·|ΔT|·ρ²·L³/μ²`.
///
/// `delta_t` is the wall-to-fluid temperature difference; its sign is
/// discarded. A zero difference gives `Gr = 0`, which is a valid state (no
/// buoyant driving force), not an error.
#[must_use]
pub fn grashof(
    beta: TemperatureCoefficient,
    gravity: Acceleration,
    delta_t: TemperatureInterval,
    density: MassDensity,
    length: Length,
    viscosity: DynamicViscosity,
) -> Ratio {
    beta * gravity * delta_t.abs() * density * density * length * length * length
        / (viscosity * viscosity)
}

/// Rayleigh number, `Ra = Gr·Pr`.
#[must_use]
pub fn rayleigh(grashof: Ratio, prandtl: Ratio) -> Ratio {
    grashof * prandtl
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared, dynamic_viscosity::pascal_second, length::meter,
        mass_density::kilogram_per_cubic_meter, ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin, thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::constraint::ConstraintError;

    use super::*;

    #[test]
    fn water_like_prandtl() {
        let pr = prandtl(
            DynamicViscosity::new::<pascal_second>(0.001),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.6),
        );

        assert_relative_eq!(pr.get::<ratio>(), 0.001 * 4180.0 / 0.6);
    }

    #[test]
    fn expansion_uses_the_absolute_scale() -> ConstraintResult<()> {
        let beta = thermal_expansion(ThermodynamicTemperature::new::<degree_celsius>(26.85))?;
        assert_relative_eq!(beta.get::<per_kelvin>(), 1.0 / 300.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn expansion_rejects_non_physical_temperature() {
        let result = thermal_expansion(ThermodynamicTemperature::new::<degree_celsius>(-273.15));
        assert!(matches!(result, Err(ConstraintError::Zero)));
    }

    #[test]
    fn grashof_with_known_values() -> ConstraintResult<()> {
        let beta = thermal_expansion(ThermodynamicTemperature::new::<degree_celsius>(26.85))?;
        let gr = grashof(
            beta,
            Acceleration::new::<meter_per_second_squared>(9.81),
            TemperatureInterval::new::<delta_kelvin>(15.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            Length::new::<meter>(1.0),
            DynamicViscosity::new::<pascal_second>(0.001),
        );

        // (1/300) * 9.81 * 15 * 1000^2 * 1^3 / 0.001^2
        assert_relative_eq!(gr.get::<ratio>(), 4.905e11, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn zero_wall_difference_means_zero_grashof() -> ConstraintResult<()> {
        let beta = thermal_expansion(ThermodynamicTemperature::new::<degree_celsius>(50.0))?;
        let gr = grashof(
            beta,
            Acceleration::new::<meter_per_second_squared>(9.81),
            TemperatureInterval::new::<delta_kelvin>(0.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            Length::new::<meter>(1.0),
            DynamicViscosity::new::<pascal_second>(0.001),
        );

        assert_relative_eq!(gr.get::<ratio>(), 0.0);
        assert_relative_eq!(
            rayleigh(gr, Ratio::new::<ratio>(7.0)).get::<ratio>(),
            0.0
        );
        Ok(())
    }
}
