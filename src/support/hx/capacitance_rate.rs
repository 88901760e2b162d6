use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`ṁ · c_p`) of a stream in a heat exchanger.
///
/// The value must be strictly positive. Positive infinity is permitted and
/// models a condensing or evaporating stream whose temperature does not
/// change with heat addition; pairing an infinite rate with a finite one
/// drives the capacity ratio to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(ThermalConductance::new::<U>(value))
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass flow rate and specific heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either operand is not strictly positive.
    pub fn from_mass_flow_and_specific_heat(
        mass_flow: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_flow * specific_heat)
    }

    /// Returns the smaller of two capacitance rates.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if *self <= *other { self } else { other }
    }

    /// Returns the larger of two capacitance rates.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if *self >= *other { self } else { other }
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
