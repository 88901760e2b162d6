use std::fmt;

use uom::si::ratio::ratio;

use super::Reynolds;

/// Flow regime of a stream, classified by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "Laminar"),
            Self::Transitional => write!(f, "Transitional"),
            Self::Turbulent => write!(f, "Turbulent"),
        }
    }
}

/// Critical Reynolds numbers used for regime classification.
///
/// These are configuration data rather than hard-coded literals so a caller
/// can override them (for instance, to model an artificially tripped
/// boundary layer). The defaults are the conventional internal-pipe values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReynoldsThresholds {
    /// Below this value the flow is laminar (internal pipe flow).
    pub internal_critical: f64,
    /// At or above this value the flow is fully turbulent.
    pub transition_end: f64,
    /// Critical value for external flow over a surface. Carried through to
    /// results for reporting; it does not affect internal-pipe
    /// classification.
    pub external_critical: f64,
}

impl Default for ReynoldsThresholds {
    fn default() -> Self {
        Self {
            internal_critical: 2000.0,
            transition_end: 4000.0,
            external_critical: 5e5,
        }
    }
}

impl ReynoldsThresholds {
    /// Classify a Reynolds number into a [`FlowRegime`].
    #[must_use]
    pub fn classify(&self, reynolds: Reynolds) -> FlowRegime {
        let re = reynolds.get::<ratio>();
        if re < self.internal_critical {
            FlowRegime::Laminar
        } else if re < self.transition_end {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }
}
