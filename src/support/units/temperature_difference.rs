use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for arithmetic on absolute temperatures.
///
/// [`uom`] distinguishes absolute temperatures
/// ([`ThermodynamicTemperature`]) from temperature differences
/// ([`TemperatureInterval`]) and does not allow subtracting or averaging two
/// absolute temperatures directly. This trait provides both operations,
/// always working on the kelvin scale so the result is unambiguous.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns the temperature halfway between `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn midpoint(self, other: Self) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            (self.get::<abs_kelvin>() + other.get::<abs_kelvin>()) / 2.0,
        )
    }
}
