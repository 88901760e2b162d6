//! Cross-flow effectiveness-NTU relationships.
//!
//! Three mixing states are modeled. "Mixed" means the stream is free to mix
//! transverse to its own flow direction (an open channel); "unmixed" means
//! it is confined (finned passages). Which stream is the mixed one is
//! identified by whether it carries the larger (`Cmax`) or smaller (`Cmin`)
//! capacitance rate.

use crate::support::hx::{
    CapacityRatio, Effectiveness, Ntu,
    effectiveness_ntu::{EffectivenessRelation, effectiveness_via},
};

/// Cross-flow arrangement with both streams unmixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlowUnmixed;

impl EffectivenessRelation for CrossFlowUnmixed {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            1. - ((ntu.powf(0.22) / cr) * ((-cr * ntu.powf(0.78)).exp() - 1.)).exp()
        })
    }
}

/// Cross-flow arrangement with the `Cmax` stream mixed and the `Cmin`
/// stream unmixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlowCmaxMixed;

impl EffectivenessRelation for CrossFlowCmaxMixed {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            (1. - (cr * ((-ntu).exp() - 1.)).exp()) / cr
        })
    }
}

/// Cross-flow arrangement with the `Cmin` stream mixed and the `Cmax`
/// stream unmixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossFlowCminMixed;

impl EffectivenessRelation for CrossFlowCminMixed {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        effectiveness_via(ntu, capacity_ratio, |ntu, cr| {
            1. - (-((1. - (-cr * ntu).exp()) / cr)).exp()
        })
    }
}
