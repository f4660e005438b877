use crate::{Pid, Timestamp};

/// One simulated process: immutable identity plus the runtime state the
/// engine mutates while the process moves through the system.
///
/// Only the engine touches `remaining_burst` and `first_dispatch`;
/// policies get read access through the public getters and hand back a
/// selection.
#[derive(Clone, Debug)]
pub struct ProcessRecord {
    pid: Pid,
    arrival_time: Timestamp,
    total_burst: usize,
    remaining_burst: usize,
    priority: u8,
    first_dispatch: Option<Timestamp>,
}

impl ProcessRecord {
    /// Creates a fresh record with its full burst still ahead of it.
    ///
    /// * `pid` - process identifier
    /// * `arrival_time` - tick at which the process becomes ready
    /// * `total_burst` - CPU ticks the process needs to finish
    /// * `priority` - lower value means more urgent (Priority policy only)
    pub fn new(pid: Pid, arrival_time: Timestamp, total_burst: usize, priority: u8) -> Self {
        ProcessRecord {
            pid,
            arrival_time,
            total_burst,
            remaining_burst: total_burst,
            priority,
            first_dispatch: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn total_burst(&self) -> usize {
        self.total_burst
    }

    pub fn remaining_burst(&self) -> usize {
        self.remaining_burst
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn first_dispatch(&self) -> Option<Timestamp> {
        self.first_dispatch
    }

    /// True once the process has held the CPU at least once.
    pub fn accessed(&self) -> bool {
        self.first_dispatch.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Records the first dispatch and returns the initial wait time.
    /// Set-once: calling it twice is an engine bug.
    pub(crate) fn mark_accessed(&mut self, now: Timestamp) -> usize {
        assert!(
            self.first_dispatch.is_none(),
            "process {} dispatched for the first time twice",
            self.pid
        );
        self.first_dispatch = Some(now);
        now.since(self.arrival_time)
    }

    /// Consumes one tick of the remaining burst.
    pub(crate) fn service_one_tick(&mut self) {
        assert!(
            self.remaining_burst > 0,
            "process {} serviced past completion",
            self.pid
        );
        self.remaining_burst -= 1;
    }

    /// The generator reassigns pids after sorting the workload by
    /// arrival time.
    pub(crate) fn reassign_pid(&mut self, pid: Pid) {
        self.pid = pid;
    }

    /// Derives the timing metrics once the burst is exhausted. The wait
    /// invariants hold for any non-negative switch cost; a violation is
    /// an engine bug, not bad input.
    pub(crate) fn completion_metrics(&self, completion: Timestamp) -> CompletionMetrics {
        assert!(self.is_complete(), "process {} has burst left", self.pid);
        let first_dispatch = match self.first_dispatch {
            Some(time) => time,
            None => unreachable!("process {} completed without ever being dispatched", self.pid),
        };

        let turnaround = completion.since(self.arrival_time);
        assert!(
            turnaround >= self.total_burst,
            "turnaround {}ms below burst {}ms for process {}",
            turnaround,
            self.total_burst,
            self.pid
        );

        CompletionMetrics {
            turnaround,
            total_wait: turnaround - self.total_burst,
            initial_wait: first_dispatch.since(self.arrival_time),
        }
    }
}

/// Per-completion timing figures, computed exactly once when a process
/// finishes its burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionMetrics {
    pub turnaround: usize,
    pub total_wait: usize,
    pub initial_wait: usize,
}
