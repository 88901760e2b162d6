//! Counter-flow effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Counter-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            if cr < 1. {
                (1. - (-ntu * (1. - cr)).exp()) / (1. - cr * (-ntu * (1. - cr)).exp())
            } else {
                // cr == 1
                ntu / (1. + ntu)
            }
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
        let eff = CounterFlow.effectiveness(Ntu::new(1.0)?, CapacityRatio::new(0.5)?);
        assert_relative_eq!(eff.get::<ratio>(), 0.564733401606, max_relative = 1e-9);

        let eff = CounterFlow.effectiveness(Ntu::new(5.0)?, CapacityRatio::new(0.25)?);
        assert_relative_eq!(eff.get::<ratio>(), 0.982257373966, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn balanced_streams_use_the_limit_form() -> ConstraintResult<()> {
        for ntu in [0.5, 1., 2., 5.] {
            let eff = CounterFlow.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(1.0)?);
            assert_relative_eq!(eff.get::<ratio>(), ntu / (1. + ntu), max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn general_form_approaches_the_limit_form() -> ConstraintResult<()> {
        for ntu in [0.5, 1., 2., 5.] {
            let near = CounterFlow.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(1. - 1e-9)?);
            assert_relative_eq!(near.get::<ratio>(), ntu / (1. + ntu), max_relative = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn degenerate_capacity_ratio() -> ConstraintResult<()> {
        for ntu in [0.1, 1., 5.] {
            let eff = CounterFlow.effectiveness(Ntu::new(ntu)?, CapacityRatio::new(0.0)?);
            assert_relative_eq!(eff.get::<ratio>(), 1. - (-ntu).exp(), max_relative = 1e-12);
        }
        Ok(())
    }
}
