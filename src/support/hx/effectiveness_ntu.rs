use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// Trait for computing heat exchanger effectiveness from NTU.
///
/// Implemented by each flow arrangement and by the
/// [`FlowConfiguration`](super::FlowConfiguration) selector itself.
pub trait EffectivenessRelation {
    /// Calculate the effectiveness for an arrangement given the [NTU](Ntu)
    /// and [capacity ratio](CapacityRatio).
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness;
}

/// The effectiveness of a heat exchanger.
///
/// The ratio of the actual to the maximum possible heat transfer rate,
/// constrained to the interval [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units for a heat exchanger.
///
/// The dimensionless thermal size of the exchanger, `NTU = UA / C_min`.
/// Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from an exchanger conductance (`UA`) and the
    /// smaller stream capacitance rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting NTU would be negative (for example,
    /// when `ua` is negative).
    pub fn from_conductance(
        ua: ThermalConductance,
        c_min: CapacitanceRate,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(ua / *c_min)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates an arrangement-specific effectiveness formula.
///
/// The `Cr = 0` degenerate case (a condensing or evaporating stream) is
/// handled here, before any formula containing `1/Cr` is evaluated: every
/// arrangement reduces to `ε = 1 − e^(−NTU)`. Results are clamped to
/// [0, 1] so floating-point noise at the interval edges cannot escape.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacity_ratio: CapacityRatio,
    fn_raw: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let cr = capacity_ratio.get::<ratio>();
    let ntu = ntu.get::<ratio>();

    let raw = if cr == 0.0 {
        1.0 - (-ntu).exp()
    } else {
        fn_raw(ntu, cr)
    };

    Effectiveness::new(raw.clamp(0.0, 1.0))
        .expect("a clamped effectiveness should always be valid")
}
