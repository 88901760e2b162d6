//! Property tests for the formula families.

use proptest::prelude::*;

use radiator_hx::support::{
    constraint::ConstraintResult,
    flow::Reynolds,
    hx::{CapacityRatio, EffectivenessRelation, FlowConfiguration, Ntu},
};
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, MassRate, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    velocity::meter_per_second,
};

#[test]
fn degenerate_capacity_ratio_collapses_every_configuration() -> ConstraintResult<()> {
    for ntu in [0.1_f64, 1.0, 5.0] {
        let expected = 1.0 - (-ntu).exp();
        for configuration in FlowConfiguration::ALL {
            let effectiveness = configuration
                .effectiveness(Ntu::new(ntu)?, CapacityRatio::new(0.0)?)
                .get::<ratio>();

            assert!(
                (effectiveness - expected).abs() < 1e-12,
                "{configuration} at NTU {ntu}: {effectiveness} != {expected}"
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn effectiveness_stays_in_the_unit_interval(
        ntu in 0.0f64..50.0,
        cr in 0.0f64..=1.0,
    ) {
        for configuration in FlowConfiguration::ALL {
            let effectiveness = configuration
                .effectiveness(Ntu::new(ntu).unwrap(), CapacityRatio::new(cr).unwrap())
                .get::<ratio>();

            prop_assert!(
                (0.0..=1.0).contains(&effectiveness),
                "{} at NTU {}, Cr {}: {}",
                configuration,
                ntu,
                cr,
                effectiveness
            );
        }
    }

    #[test]
    fn effectiveness_is_non_decreasing_in_ntu(
        ntu in 0.0f64..20.0,
        step in 0.001f64..5.0,
        cr in 0.0f64..=1.0,
    ) {
        for configuration in FlowConfiguration::ALL {
            let capacity_ratio = CapacityRatio::new(cr).unwrap();
            let lower = configuration
                .effectiveness(Ntu::new(ntu).unwrap(), capacity_ratio)
                .get::<ratio>();
            let upper = configuration
                .effectiveness(Ntu::new(ntu + step).unwrap(), capacity_ratio)
                .get::<ratio>();

            prop_assert!(
                upper >= lower - 1e-12,
                "{} fell from {} to {} between NTU {} and {}",
                configuration,
                lower,
                upper,
                ntu,
                ntu + step
            );
        }
    }

    #[test]
    fn reynolds_velocity_and_mass_flow_forms_agree(
        density in 1.0f64..2000.0,
        velocity in 0.01f64..10.0,
        diameter in 0.001f64..0.5,
        viscosity in 1e-5f64..0.1,
    ) {
        let mass_flow = density * velocity * std::f64::consts::FRAC_PI_4 * diameter * diameter;

        let from_velocity = Reynolds::from_velocity(
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            Velocity::new::<meter_per_second>(velocity),
            Length::new::<meter>(diameter),
            DynamicViscosity::new::<pascal_second>(viscosity),
        )
        .unwrap();
        let from_mass_flow = Reynolds::from_mass_flow(
            MassRate::new::<kilogram_per_second>(mass_flow),
            DynamicViscosity::new::<pascal_second>(viscosity),
            Length::new::<meter>(diameter),
        )
        .unwrap();

        let relative = (from_velocity.get::<ratio>() - from_mass_flow.get::<ratio>()).abs()
            / from_velocity.get::<ratio>();
        prop_assert!(relative < 1e-9);
    }
}
