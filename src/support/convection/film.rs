use crate::support::units::ThermalInsulance;
use uom::si::{
    f64::{HeatTransfer, Length, Ratio, ThermalConductivity},
    ratio::ratio,
};

/// Film heat transfer coefficient, `h = Nu·λ/D`.
///
/// Each stream uses its own characteristic diameter.
#[must_use]
pub fn film_coefficient(
    nusselt: Ratio,
    thermal_conductivity: ThermalConductivity,
    diameter: Length,
) -> HeatTransfer {
    nusselt * thermal_conductivity / diameter
}

/// Overall heat transfer coefficient of two films in series,
/// `U = 1/(1/h_hot + 1/h_cold)`.
#[must_use]
pub fn overall_coefficient(hot: HeatTransfer, cold: HeatTransfer) -> HeatTransfer {
    let unity = Ratio::new::<ratio>(1.0);
    unity / (unity / hot + unity / cold)
}

/// Overall heat transfer coefficient with an extra series resistance,
/// `U = 1/(1/h_hot + R + 1/h_cold)`.
///
/// `resistance` is the sum of any fouling factors and per-area wall
/// resistance. With `R = 0` this reduces to [`overall_coefficient`].
#[must_use]
pub fn overall_coefficient_with_resistances(
    hot: HeatTransfer,
    cold: HeatTransfer,
    resistance: ThermalInsulance,
) -> HeatTransfer {
    let unity = Ratio::new::<ratio>(1.0);
    unity / (unity / hot + resistance + unity / cold)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{
            heat_transfer::watt_per_square_meter_kelvin, length::meter,
            thermal_conductivity::watt_per_meter_kelvin,
        },
    };

    use super::*;

    #[test]
    fn film_coefficient_from_nusselt() {
        let h = film_coefficient(
            Ratio::new::<ratio>(100.0),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.6),
            Length::new::<meter>(0.02),
        );

        assert_relative_eq!(h.get::<watt_per_square_meter_kelvin>(), 3000.0, max_relative = 1e-12);
    }

    #[test]
    fn series_resistance_of_equal_films_halves_the_coefficient() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0);
        let u = overall_coefficient(h, h);
        assert_relative_eq!(u.get::<watt_per_square_meter_kelvin>(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn extra_resistance_lowers_the_coefficient() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0);
        let fouled = overall_coefficient_with_resistances(
            h,
            h,
            Ratio::new::<ratio>(1.0) / HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0),
        );

        assert_relative_eq!(
            fouled.get::<watt_per_square_meter_kelvin>(),
            2000.0 / 3.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_resistance_matches_the_baseline() {
        let hot = HeatTransfer::new::<watt_per_square_meter_kelvin>(1800.0);
        let cold = HeatTransfer::new::<watt_per_square_meter_kelvin>(2400.0);

        let baseline = overall_coefficient(hot, cold);
        let augmented =
            overall_coefficient_with_resistances(hot, cold, ThermalInsulance::ZERO);

        assert_relative_eq!(
            baseline.get::<watt_per_square_meter_kelvin>(),
            augmented.get::<watt_per_square_meter_kelvin>()
        );
    }
}
