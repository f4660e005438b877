use std::fmt;

use crate::{Pid, Timestamp};

/// Everything a run reports, in emission order. `Display` renders the
/// exact line the report expects, so two runs with the same seed and
/// policy produce byte-identical logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimEvent {
    /// A process reached its arrival time and joined the ready queue.
    /// Timestamped with the arrival tick, even if admission was observed
    /// later (e.g. during a context-switch charge).
    Created {
        time: Timestamp,
        pid: Pid,
        burst: usize,
    },
    /// First dispatch of a process.
    FirstAccess {
        time: Timestamp,
        pid: Pid,
        initial_wait: usize,
    },
    /// The CPU changed owners; `time` is the tick the swap began, before
    /// the switch cost was charged.
    ContextSwitch { time: Timestamp, from: Pid, to: Pid },
    /// A process exhausted its burst.
    Completed {
        time: Timestamp,
        pid: Pid,
        turnaround: usize,
        initial_wait: usize,
        total_wait: usize,
    },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Created { time, pid, burst } => {
                write!(
                    f,
                    "[time {}ms] Process {} created (requires {}ms CPU time)",
                    time, pid, burst
                )
            }
            SimEvent::FirstAccess {
                time,
                pid,
                initial_wait,
            } => {
                write!(
                    f,
                    "[time {}ms] Process {} accessed CPU for the first time (initial wait time {}ms)",
                    time, pid, initial_wait
                )
            }
            SimEvent::ContextSwitch { time, from, to } => {
                write!(
                    f,
                    "[time {}ms] Context switch (swapped out process {} for process {})",
                    time, from, to
                )
            }
            SimEvent::Completed {
                time,
                pid,
                turnaround,
                initial_wait,
                total_wait,
            } => {
                write!(
                    f,
                    "[time {}ms] Process {} completed its CPU burst (turnaround time {}ms, \
                     initial wait time {}ms, total wait time {}ms)",
                    time, pid, turnaround, initial_wait, total_wait
                )
            }
        }
    }
}
