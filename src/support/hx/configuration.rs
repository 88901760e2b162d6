use std::{fmt, str::FromStr};

use thiserror::Error;

use super::{
    CapacityRatio, Effectiveness, Ntu,
    arrangement::{
        CounterFlow, CrossFlowCmaxMixed, CrossFlowCminMixed, CrossFlowUnmixed, ParallelFlow,
        ShellAndTube,
    },
    effectiveness_ntu::EffectivenessRelation,
};

/// The flow configuration of a heat exchanger.
///
/// A closed six-way selector. There is deliberately no `Default`
/// implementation: the caller must state the configuration, and an
/// unrecognized identifier fails to parse instead of silently falling back
/// to counter-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowConfiguration {
    /// Both streams flow in the same direction.
    ParallelFlow,
    /// The streams flow in opposite directions.
    CounterFlow,
    /// One shell pass with an even number of tube passes.
    ShellAndTube,
    /// Cross-flow, both streams unmixed.
    CrossFlowUnmixed,
    /// Cross-flow, `Cmax` stream mixed and `Cmin` stream unmixed.
    CrossFlowCmaxMixed,
    /// Cross-flow, `Cmin` stream mixed and `Cmax` stream unmixed.
    CrossFlowCminMixed,
}

impl FlowConfiguration {
    /// All supported configurations, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ParallelFlow,
        Self::CounterFlow,
        Self::ShellAndTube,
        Self::CrossFlowUnmixed,
        Self::CrossFlowCmaxMixed,
        Self::CrossFlowCminMixed,
    ];

    /// The canonical string identifier for this configuration.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::ParallelFlow => "parallel",
            Self::CounterFlow => "counter",
            Self::ShellAndTube => "shell-and-tube",
            Self::CrossFlowUnmixed => "cross-flow-unmixed",
            Self::CrossFlowCmaxMixed => "cross-flow-cmax-mixed",
            Self::CrossFlowCminMixed => "cross-flow-cmin-mixed",
        }
    }
}

impl EffectivenessRelation for FlowConfiguration {
    fn effectiveness(&self, ntu: Ntu, capacity_ratio: CapacityRatio) -> Effectiveness {
        match self {
            Self::ParallelFlow => ParallelFlow.effectiveness(ntu, capacity_ratio),
            Self::CounterFlow => CounterFlow.effectiveness(ntu, capacity_ratio),
            Self::ShellAndTube => ShellAndTube.effectiveness(ntu, capacity_ratio),
            Self::CrossFlowUnmixed => CrossFlowUnmixed.effectiveness(ntu, capacity_ratio),
            Self::CrossFlowCmaxMixed => CrossFlowCmaxMixed.effectiveness(ntu, capacity_ratio),
            Self::CrossFlowCminMixed => CrossFlowCminMixed.effectiveness(ntu, capacity_ratio),
        }
    }
}

impl fmt::Display for FlowConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// An error returned when parsing an unrecognized flow-configuration
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized flow configuration {0:?}")]
pub struct ParseFlowConfigurationError(String);

impl FromStr for FlowConfiguration {
    type Err = ParseFlowConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|configuration| configuration.identifier() == s)
            .copied()
            .ok_or_else(|| ParseFlowConfigurationError(s.to_owned()))
    }
}
