use std::collections::VecDeque;

use super::Policy;
use crate::{Pid, ProcessRecord};

/// First Come First Serve: the queue head keeps the CPU until it
/// completes. Admission order is arrival order, so no tie-breaking is
/// needed beyond the queue itself.
#[derive(Debug, Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Fcfs {
        Fcfs
    }
}

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "First Come First Serve"
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

    fn is_preemptive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::queue_of;
    use super::*;

    #[test]
    fn always_picks_the_head() {
        let mut policy = Fcfs::new();
        let queue = queue_of(&[(300, 0), (100, 0)]);

        assert_eq!(policy.select_next(&queue, None), Some(0));
        assert_eq!(policy.select_next(&queue, Some(Pid::new(1))), Some(0));
        assert_eq!(policy.select_next(&VecDeque::new(), None), None);
    }
}
