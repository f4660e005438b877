//! The scheduling policies.
//!
//! Each policy owns the selection rule over the ready queue; every other
//! state transition (admission, burst accounting, removal) belongs to
//! the engine. Policies read process state and answer "who runs this
//! tick" — they never mutate a record.

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::collections::VecDeque;

use crate::{Pid, ProcessRecord};

/// Selection strategy driven by the engine once per tick.
pub trait Policy {
    /// Report header name, e.g. "First Come First Serve".
    fn name(&self) -> &'static str;

    /// Picks the ready-queue index to service this tick, given the pid
    /// serviced on the previous tick. Returns `None` iff the queue is
    /// empty.
    fn select_next(
        &mut self,
        ready: &VecDeque<ProcessRecord>,
        previous: Option<Pid>,
    ) -> Option<usize>;

    /// Quantum policies ask for preemption once the chosen process has
    /// run `ran` consecutive ticks; everyone else keeps the default.
    fn on_tick_elapsed(&self, _chosen: &ProcessRecord, _ran: usize) -> bool {
        false
    }

    /// Whether a newly arrived or better candidate may take the CPU
    /// before the running process yields on its own.
    fn is_preemptive(&self) -> bool;
}

/// Queue position of `previous`, if that process is still in the
/// system. Non-preemptive policies stick with it until it completes.
pub(crate) fn position_of(ready: &VecDeque<ProcessRecord>, previous: Option<Pid>) -> Option<usize> {
    let pid = previous?;
    ready.iter().position(|record| record.pid() == pid)
}
