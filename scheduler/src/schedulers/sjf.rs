use std::collections::VecDeque;

use super::{position_of, Policy};
use crate::{Pid, ProcessRecord};

/// Shortest Job First: among the ready processes, run the one with the
/// smallest total burst. Non-preemptive, so the previous pick keeps the
/// CPU until it completes even if a shorter job arrives meanwhile.
#[derive(Debug, Default)]
pub struct Sjf;

impl Sjf {
    pub fn new() -> Sjf {
        Sjf
    }
}

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn select_next(
        &mut self,
        ready: &VecDeque<ProcessRecord>,
        previous: Option<Pid>,
    ) -> Option<usize> {
        if let Some(index) = position_of(ready, previous) {
            return Some(index);
        }

        /* min_by_key keeps the first minimum, which is the earliest
        queue position: ties break by arrival order. */
        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, record)| record.total_burst())
            .map(|(index, _)| index)
    }

    fn is_preemptive(&self) -> bool {
        false
    }
}
