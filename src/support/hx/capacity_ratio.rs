use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::ratio};

use super::CapacitanceRate;

/// Capacity ratio (`C_min / C_max`) for a heat exchanger.
///
/// Quantifies how evenly the stream capacitance rates are matched and falls
/// in the closed interval [0, 1]. A ratio of zero corresponds to a
/// condensing or evaporating stream (infinite `C_max`).
#[derive(Debug, Clone, Copy)]
pub struct CapacityRatio(Constrained<Ratio, UnitInterval>);

impl CapacityRatio {
    /// Create a [`CapacityRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`CapacityRatio`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Create a [`CapacityRatio`] from the capacitance rates of the two streams.
    ///
    /// When both rates are infinite the streams are perfectly balanced and
    /// the ratio is one.
    #[must_use]
    pub fn from_capacitance_rates(first: CapacitanceRate, second: CapacitanceRate) -> Self {
        let min = *first.min(second);
        let max = *first.max(second);

        let value = if min.is_infinite() {
            Ratio::new::<ratio>(1.0)
        } else {
            min / max
        };

        Self::from_quantity(value).expect("capacitance rates should always yield a valid ratio")
    }
}

impl Deref for CapacityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use super::*;

    #[test]
    fn from_capacitance_rates() -> ConstraintResult<()> {
        let cr = CapacityRatio::from_capacitance_rates(
            CapacitanceRate::new::<watt_per_kelvin>(10.0)?,
            CapacitanceRate::new::<watt_per_kelvin>(20.0)?,
        );

        assert_relative_eq!(cr.get::<ratio>(), 0.5);
        Ok(())
    }

    #[test]
    fn infinite_rate_gives_zero_ratio() -> ConstraintResult<()> {
        let cr = CapacityRatio::from_capacitance_rates(
            CapacitanceRate::new::<watt_per_kelvin>(10.0)?,
            CapacitanceRate::new::<watt_per_kelvin>(f64::INFINITY)?,
        );

        assert_relative_eq!(cr.get::<ratio>(), 0.0);
        Ok(())
    }

    #[test]
    fn two_infinite_rates_are_balanced() -> ConstraintResult<()> {
        let cr = CapacityRatio::from_capacitance_rates(
            CapacitanceRate::new::<watt_per_kelvin>(f64::INFINITY)?,
            CapacitanceRate::new::<watt_per_kelvin>(f64::INFINITY)?,
        );

        assert_relative_eq!(cr.get::<ratio>(), 1.0);
        Ok(())
    }

    #[test]
    fn rejects_out_of_interval_values() {
        assert!(CapacityRatio::new(1.5).is_err());
        assert!(CapacityRatio::new(-0.5).is_err());
    }
}
