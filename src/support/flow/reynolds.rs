use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, MassRate, Ratio, Velocity},
    ratio::ratio,
};

/// Reynolds number of a stream.
///
/// The ratio of inertial to viscous forces, which governs whether the flow
/// is laminar or turbulent. The value must be finite and strictly positive;
/// a zero or infinite Reynolds number means an upstream quantity (velocity,
/// diameter, viscosity) was outside its physical domain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reynolds(Constrained<Ratio, StrictlyPositive>);

impl Reynolds {
    /// Create a [`Reynolds`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not finite and strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`Reynolds`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not finite and strictly positive.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        if quantity.get::<ratio>().is_infinite() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`Reynolds`] from the velocity form, `Re = ρ·V·D/μ`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the result is not finite and strictly positive (for
    /// example, a zero diameter or a zero viscosity).
    pub fn from_velocity(
        density: MassDensity,
        velocity: Velocity,
        diameter: Length,
        viscosity: DynamicViscosity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(density * velocity * diameter / viscosity)
    }

    /// Create a [`Reynolds`] from the mass-flow form, `Re = 4·ṁ/(π·μ·D)`.
    ///
    /// Numerically consistent with [`Reynolds::from_velocity`] when
    /// `ṁ = ρ·V·(π/4)·D²`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the result is not finite and strictly positive.
    pub fn from_mass_flow(
        mass_flow: MassRate,
        viscosity: DynamicViscosity,
        diameter: Length,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(4.0 * mass_flow / (std::f64::consts::PI * viscosity * diameter))
    }
}

impl Deref for Reynolds {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
