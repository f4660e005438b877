//! A CPU scheduling simulator library.
//!
//! Replays, tick by tick, how a scheduling policy dispatches a single
//! CPU among a workload of processes, and aggregates the classic timing
//! statistics: turnaround time, total wait time and initial wait time.
//!
//! The pieces compose the way the data flows: [`generate`] produces a
//! workload, an [`Engine`] drives it through a [`Policy`], completions
//! land in a [`Collector`], and the resulting [`RunReport`] carries the
//! ordered event log plus the min/avg/max summary.

use std::num::NonZeroUsize;

mod common_types;
pub use common_types::{Pid, Timestamp};

mod process;
pub use process::{CompletionMetrics, ProcessRecord};

mod workload;
pub use workload::{generate, WorkloadConfig};

mod collector;
pub use collector::{Collector, MetricSummary, RunSummary};

mod event;
pub use event::SimEvent;

mod error;
pub use error::Error;

mod engine;
pub use engine::{Engine, EngineConfig, RunReport};

pub mod schedulers;
pub use schedulers::{Fcfs, Policy, Priority, RoundRobin, Sjf, Srtf};

/// Returns a policy that services processes in arrival order.
pub fn fcfs() -> impl Policy {
    Fcfs::new()
}

/// Returns a policy that runs the smallest total burst first, without
/// preemption.
pub fn sjf() -> impl Policy {
    Sjf::new()
}

/// Returns a policy that always runs the smallest remaining burst,
/// re-evaluated on every tick.
pub fn srtf() -> impl Policy {
    Srtf::new()
}

/// Returns a round robin policy.
///
/// * `time_slice` - the quantum a process may run before it is moved to
///                  the back of the ready queue
pub fn round_robin(time_slice: NonZeroUsize) -> impl Policy {
    RoundRobin::new(time_slice)
}

/// Returns a policy that favors the lowest priority value.
pub fn priority() -> impl Policy {
    Priority::new()
}
