use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::Policy;
use crate::{Pid, ProcessRecord};

/// Round Robin: the queue head runs for at most `time_slice` consecutive
/// ticks, then the engine moves it to the tail if it has burst left.
/// Preemptive only through quantum expiry — arrivals never interrupt the
/// running slice.
#[derive(Debug)]
pub struct RoundRobin {
    time_slice: NonZeroUsize,
}

impl RoundRobin {
    /// * `time_slice` - consecutive ticks a process may run before it is
    ///                  sent to the back of the queue
    pub fn new(time_slice: NonZeroUsize) -> RoundRobin {
        RoundRobin { time_slice }
    }

    pub fn time_slice(&self) -> NonZeroUsize {
        self.time_slice
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn select_next(
        &mut self,
        ready: &VecDeque<ProcessRecord>,
        _previous: Option<Pid>,
    ) -> Option<usize> {
        if ready.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn on_tick_elapsed(&self, _chosen: &ProcessRecord, ran: usize) -> bool {
        ran >= self.time_slice.get()
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::queue_of;
    use super::*;

    #[test]
    fn requests_preemption_at_quantum_expiry() {
        let policy = RoundRobin::new(NonZeroUsize::new(3).unwrap());
        let queue = queue_of(&[(100, 0)]);

        assert!(!policy.on_tick_elapsed(&queue[0], 2));
        assert!(policy.on_tick_elapsed(&queue[0], 3));
    }

    #[test]
    fn services_the_head() {
        let mut policy = RoundRobin::new(NonZeroUsize::new(3).unwrap());
        let queue = queue_of(&[(100, 0), (200, 0)]);
        assert_eq!(policy.select_next(&queue, Some(Pid::new(2))), Some(0));
    }
}
