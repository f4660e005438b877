use std::collections::VecDeque;

use super::Policy;
use crate::{Pid, ProcessRecord};

/// Shortest Remaining Time First: the preemptive flavor of SJF. The
/// choice is re-evaluated every tick against `remaining_burst`, so a
/// short newcomer takes the CPU away from a long-running process.
#[derive(Debug, Default)]
pub struct Srtf;

impl Srtf {
    pub fn new() -> Srtf {
        Srtf
    }
}

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "Shortest Remaining Time First"
    }

    fn select_next(
        &mut self,
        ready: &VecDeque<ProcessRecord>,
        _previous: Option<Pid>,
    ) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, record)| record.remaining_burst())
            .map(|(index, _)| index)
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
    fn ignores_the_previous_pick() {
        let mut policy = Srtf::new();
        let queue = queue_of(&[(400, 0), (100, 0)]);
        assert_eq!(policy.select_next(&queue, Some(Pid::new(1))), Some(1));
    }

    #[test]
    fn ties_break_by_queue_order() {
        let mut policy = Srtf::new();
        let queue = queue_of(&[(100, 0), (100, 0)]);
        assert_eq!(policy.select_next(&queue, None), Some(0));
    }
}
