use uom::si::{
    f64::{Length, MassDensity, Pressure, Ratio, Velocity},
    ratio::ratio,
};

use super::{FlowRegime, Reynolds};

/// Darcy friction factor for flow in a circular duct.
///
/// Laminar flow uses `f = 64/Re`; transitional and turbulent flow use the
/// Blasius correlation `f = 0.079/Re^0.25`.
#[must_use]
pub fn friction_factor(reynolds: Reynolds, regime: FlowRegime) -> Ratio {
    let re = reynolds.get::<ratio>();
    let f = match regime {
        FlowRegime::Laminar => 64.0 / re,
        FlowRegime::Transitional | FlowRegime::Turbulent => 0.079 / re.powf(0.25),
    };
    Ratio::new::<ratio>(f)
}

/// Darcy-Weisbach pressure drop along a tube, `ΔP = f·L·ρ·V²/(2·D)`.
#[must_use]
pub fn pressure_drop(
    friction_factor: Ratio,
    length: Length,
    diameter: Length,
    density: MassDensity,
    velocity: Velocity,
) -> Pressure {
    friction_factor * length * density * velocity * velocity / (2.0 * diameter)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, mass_density::kilogram_per_cubic_meter, pressure::pascal,
        velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintResult;

    use super::*;

    #[test]
    fn laminar_friction_factor() -> ConstraintResult<()> {
        let f = friction_factor(Reynolds::new(1600.0)?, FlowRegime::Laminar);
        assert_relative_eq!(f.get::<ratio>(), 0.04, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn blasius_friction_factor() -> ConstraintResult<()> {
        let f = friction_factor(Reynolds::new(10_000.0)?, FlowRegime::Turbulent);
        assert_relative_eq!(f.get::<ratio>(), 0.0079, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn darcy_weisbach_pressure_drop() -> ConstraintResult<()> {
        let f = friction_factor(Reynolds::new(1600.0)?, FlowRegime::Laminar);
        let dp = pressure_drop(
            f,
            Length::new::<meter>(1.0),
            Length::new::<meter>(0.02),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            Velocity::new::<meter_per_second>(0.5),
        );

        // 0.04 * 1.0 * 1000 * 0.25 / (2 * 0.02)
        assert_relative_eq!(dp.get::<pascal>(), 250.0, max_relative = 1e-12);
        Ok(())
    }
}
