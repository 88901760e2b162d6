use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::flow::Reynolds;

/// Nusselt number for fully-developed laminar flow in a tube with constant
/// wall temperature.
pub const NU_LAMINAR: f64 = 3.66;

/// Nusselt correlation applied to a transitional or turbulent stream.
///
/// The two streams of an exchanger may use different correlations; in a
/// tube-bank geometry one fluid flows inside the tubes while the other
/// crosses them, so the choice is made per stream by the caller rather than
/// inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurbulentCorrelation {
    /// `Nu = (0.4·Re^0.5 + 0.06·Re^(2/3))·Pr^0.4·(μ/μ_wall)^0.25`
    ///
    /// The viscosity-ratio factor corrects for property variation across the
    /// thermal boundary layer and defaults to 1 when the wall viscosity is
    /// unknown.
    ChurchillBernstein,
    /// `Nu = 0.3 + [0.62·Re^0.5·Pr^(1/3) / (1+(0.4/Pr)^(2/3))^0.25]
    ///  · [1+(Re/282000)^(5/8)]^(4/5)`
    ///
    /// External flow across a cylinder, valid over the full Reynolds range.
    ExternalCylinder,
}

impl TurbulentCorrelation {
    /// Evaluate the correlation.
    ///
    /// `viscosity_ratio` is the bulk-to-wall dynamic viscosity ratio
    /// `μ/μ_wall`; only the Churchill-Bernstein form uses it. Pass 1 when
    /// the wall viscosity is not available.
    #[must_use]
    pub fn nusselt(self, reynolds: Reynolds, prandtl: Ratio, viscosity_ratio: Ratio) -> Ratio {
        let re = reynolds.get::<ratio>();
        let pr = prandtl.get::<ratio>();

        let nu = match self {
            Self::ChurchillBernstein => {
                (0.4 * re.sqrt() + 0.06 * re.powf(2.0 / 3.0))
                    * pr.powf(0.4)
                    * viscosity_ratio.get::<ratio>().powf(0.25)
            }
            Self::ExternalCylinder => {
                let film = 0.62 * re.sqrt() * pr.cbrt()
                    / (1.0 + (0.4 / pr).powf(2.0 / 3.0)).powf(0.25);
                let high_re = (1.0 + (re / 282_000.0).powf(5.0 / 8.0)).powf(4.0 / 5.0);
                0.3 + film * high_re
            }
        };

        Ratio::new::<ratio>(nu)
    }
}
