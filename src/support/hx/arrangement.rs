//! Flow arrangements supported by the effectiveness-NTU toolkit.

mod counter_flow;
mod cross_flow;
mod parallel_flow;
mod shell_and_tube;

pub use counter_flow::CounterFlow;
pub use cross_flow::{CrossFlowCmaxMixed, CrossFlowCminMixed, CrossFlowUnmixed};
pub use parallel_flow::ParallelFlow;
pub use shell_and_tube::ShellAndTube;
