use std::collections::VecDeque;

use super::{position_of, Policy};
use crate::{Pid, ProcessRecord};

/// Priority scheduling, baseline non-preemptive form: run the ready
/// process with the lowest priority value; arrival order breaks ties.
#[derive(Debug, Default)]
pub struct Priority;

impl Priority {
    pub fn new() -> Priority {
        Priority
    }
}

impl Policy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn select_next(
        &mut self,
        ready: &VecDeque<ProcessRecord>,
        previous: Option<Pid>,
    ) -> Option<usize> {
        if let Some(index) = position_of(ready, previous) {
            return Some(index);
        }

        ready
            .iter()
            .enumerate()
            .min_by_key(|(_, record)| record.priority())
            .map(|(index, _)| index)
    }

    fn is_preemptive(&self) -> bool {
        false
    }
}
