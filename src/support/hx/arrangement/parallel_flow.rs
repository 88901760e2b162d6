//! Parallel-flow effectiveness-NTU relationship.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Parallel-flow heat exchanger arrangement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelFlow;

impl EffectivenessRelation for ParallelFlow {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            (1. - (-ntu * (1. + cr)).exp()) / (1. + cr)
        })
    }
}
