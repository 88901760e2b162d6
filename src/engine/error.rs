use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Side;

/// Errors returned by the calculation engine.
///
/// The engine reports the first violated precondition and produces no
/// partial results. Input domain errors ([`InvalidInput`]) are kept distinct
/// from physical-consistency errors
/// ([`NonPhysicalMeanTemperature`], [`NoDrivingTemperatureDifference`]):
/// the former mean a formula is arithmetically undefined, the latter mean
/// the numbers are well-formed but model the exchanger incorrectly.
///
/// [`InvalidInput`]: EngineError::InvalidInput
/// [`NonPhysicalMeanTemperature`]: EngineError::NonPhysicalMeanTemperature
/// [`NoDrivingTemperatureDifference`]: EngineError::NoDrivingTemperatureDifference
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input quantity makes at least one formula undefined.
    #[error("invalid input {field}: {source}")]
    InvalidInput {
        /// Path of the offending input field.
        field: &'static str,
        source: ConstraintError,
    },

    /// A stream's mean temperature is at or below absolute zero, so the
    /// thermal expansion coefficient `β = 1/T` is undefined.
    #[error("mean temperature of the {side} stream is at or below absolute zero")]
    NonPhysicalMeanTemperature { side: Side },

    /// The inlet temperatures admit no positive hot-to-cold heat transfer;
    /// the exchanger is modeled backwards.
    #[error(
        "no driving temperature difference: hot inlet {hot_inlet_kelvin} K \
         is not above cold inlet {cold_inlet_kelvin} K"
    )]
    NoDrivingTemperatureDifference {
        hot_inlet_kelvin: f64,
        cold_inlet_kelvin: f64,
    },
}
