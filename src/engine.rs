//! The thermal-hydraulic calculation engine.
//!
//! [`calculate`] turns one immutable [`CalculationInput`] into one immutable
//! [`CalculationResults`] record. The derivation order is fixed:
//!
//! 1. Reynolds numbers and flow regimes for both streams
//! 2. Prandtl, Grashof, and Rayleigh numbers
//! 3. Nusselt numbers, film coefficients, and the overall coefficient
//! 4. Capacity rates, capacity ratio, NTU, effectiveness, and heat duty
//! 5. Friction factors and pressure drops
//!
//! The engine is a pure function with no internal state: it either returns
//! a fully-populated results record or an [`EngineError`] describing the
//! first violated precondition. It never returns partial results and never
//! lets a `NaN` or infinity escape into the record.

mod error;
mod input;
mod results;
mod solve;

use std::fmt;

pub use error::EngineError;
pub use input::{CalculationInput, Environment, FoulingFactors, StreamInput, TubeGeometry};
pub use results::CalculationResults;

/// Identifies which stream of the exchanger a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Hot,
    Cold,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::Cold => write!(f, "cold"),
        }
    }
}

/// A pair of per-stream values, one for each side of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SidePair<T> {
    pub hot: T,
    pub cold: T,
}

/// Run the full calculation pipeline on a single input record.
///
/// # Errors
///
/// Returns an [`EngineError`] if any input quantity makes a formula
/// undefined (zero or negative diameters, viscosities, flows, and so on),
/// if a stream's mean temperature is at or below absolute zero, or if the
/// inlet temperatures admit no positive hot-to-cold heat transfer.
pub fn calculate(input: &CalculationInput) -> Result<CalculationResults, EngineError> {
    solve::solve(input)
}
