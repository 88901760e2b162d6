//! Shell-and-tube effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Shell-and-tube heat exchanger arrangement with a single shell pass
/// and any even number of tube passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellAndTube;

impl EffectivenessRelation for ShellAndTube {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            let root = (1. + cr.powi(2)).sqrt();
            let exp_term = (-ntu * root).exp();
            2. / (1. + cr + root * (1. + exp_term) / (1. - exp_term))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::ConstraintResult;
    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use super::*;

    #[test]
    fn known_values() -> ConstraintResult<()> {
        let eff = ShellAndTube.effectiveness(Ntu::new(1.0)?, CapacityRatio::new(0.5)?);
        assert_relative_eq!(eff.get::<ratio>(), 0.539939556106, max_relative = 1e-9);

        let eff = ShellAndTube.effectiveness(Ntu::new(1.0)?, CapacityRatio::new(1.0)?);
        assert_relative_eq!(eff.get::<ratio>(), 0.462670994062, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn zero_ntu_means_zero_effectiveness() -> ConstraintResult<()> {
        let eff = ShellAndTube.effectiveness(Ntu::new(0.0)?, CapacityRatio::new(0.5)?);
        assert_relative_eq!(eff.get::<ratio>(), 0.0);
        Ok(())
    }

    #[test]
    fn degenerate_capacity_ratio() -> ConstraintResult<()> {
        for ntu in [0.1, 1., 5.] {
            let eff = ShellAndTube.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(0.0)?);
            assert_relative_eq!(eff.get::<ratio>(), 1. - (-ntu).exp(), max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn never_exceeds_counter_flow() -> ConstraintResult<()> {
        use super::super::CounterFlow;

        for ntu in [0.5, 1., 2., 5.] {
            for cr in [0.25, 0.5, 1.0] {
                let shell = ShellAndTube.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(cr)?);
                let counter = CounterFlow.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(cr)?);
                assert!(shell.get::<ratio>() <= counter.get::<ratio>() + 1e-12);
            }
        }
        Ok(())
    }
}
