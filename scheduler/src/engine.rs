use std::collections::VecDeque;

use log::{debug, info};

use crate::collector::{Collector, RunSummary};
use crate::event::SimEvent;
use crate::schedulers::Policy;
use crate::{Error, Pid, ProcessRecord, Timestamp};

/// Engine knobs. The defaults mirror the classic exercise: a full
/// context switch between two runnable processes costs 14ms; picking a
/// process up after the CPU sat idle costs 7ms.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub switch_cost: usize,
    pub resume_cost: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            switch_cost: 14,
            resume_cost: 7,
        }
    }
}

/// Everything one policy run produces.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Header name of the policy that ran.
    pub policy: &'static str,
    /// Ordered event log of the whole run.
    pub events: Vec<SimEvent>,
    /// Aggregated timing statistics over all completions.
    pub summary: RunSummary,
    /// Clock value when the last process completed.
    pub total_time: Timestamp,
    /// Ticks spent actually servicing bursts; equals the workload's
    /// total burst when the run is sound.
    pub service_ticks: usize,
}

/// The dispatch loop. Owns the clock, the ready queue and every process
/// mutation; the policy only answers "who runs next".
pub struct Engine {
    config: EngineConfig,
    policy: Box<dyn Policy>,
}

impl Engine {
    pub fn new(config: EngineConfig, policy: Box<dyn Policy>) -> Engine {
        Engine { config, policy }
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Replays the workload tick by tick until every process completes.
    /// The run operates on a fresh copy of the records and fills the
    /// caller's collector, so nothing leaks between policy runs.
    pub fn run(
        &mut self,
        workload: &[ProcessRecord],
        collector: &mut Collector,
    ) -> Result<RunReport, Error> {
        let total = workload.len();
        let mut pending: Vec<ProcessRecord> = workload.to_vec();
        let mut ready: VecDeque<ProcessRecord> = VecDeque::new();
        let mut events: Vec<SimEvent> = Vec::new();

        let mut now = Timestamp::new(0);
        let mut completed = 0;
        let mut service_ticks = 0;

        /* Pid serviced on the previous service tick, and how long it has
        held the CPU without interruption. */
        let mut last_serviced: Option<Pid> = None;
        let mut ran_consecutively = 0;
        /* Set while the CPU sits idle between two service ticks; such a
        transition charges the cheaper resume cost. */
        let mut crossed_idle_gap = false;

        let bound = self.safety_bound(workload);
        let mut iterations = 0;

        info!(
            "{}: dispatching {} processes",
            self.policy.name(),
            total
        );

        while completed < total {
            iterations += 1;
            if iterations > bound {
                return Err(Error::SafetyBoundExceeded {
                    policy: self.policy.name(),
                    iterations,
                    bound,
                });
            }

            admit_arrivals(&mut pending, &mut ready, now, &mut events);

            let index = match self.policy.select_next(&ready, last_serviced) {
                Some(index) => index,
                None => {
                    if last_serviced.is_some() {
                        crossed_idle_gap = true;
                    }
                    now = now + 1;
                    continue;
                }
            };
            let selected = ready[index].pid();

            /* Context switch: charged only when the serviced pid actually
            changes, never on the first dispatch of the run. The charge
            is atomic: the event carries the pre-charge time, then the
            clock jumps past the cost before servicing resumes. */
            if let Some(previous) = last_serviced {
                if previous != selected {
                    let cost = if crossed_idle_gap {
                        self.config.resume_cost
                    } else {
                        self.config.switch_cost
                    };
                    events.push(SimEvent::ContextSwitch {
                        time: now,
                        from: previous,
                        to: selected,
                    });
                    debug!(
                        "context switch {} -> {} at {}ms ({}ms)",
                        previous, selected, now, cost
                    );
                    now = now + cost;
                    ran_consecutively = 0;
                }
            }
            crossed_idle_gap = false;

            let record = &mut ready[index];
            if !record.accessed() {
                let initial_wait = record.mark_accessed(now);
                events.push(SimEvent::FirstAccess {
                    time: now,
                    pid: selected,
                    initial_wait,
                });
            }

            record.service_one_tick();
            service_ticks += 1;
            ran_consecutively += 1;
            last_serviced = Some(selected);

            if record.is_complete() {
                /* The service tick occupies [now, now + 1), so the
                process is done at now + 1. */
                let finish = now + 1;
                let metrics = record.completion_metrics(finish);
                events.push(SimEvent::Completed {
                    time: finish,
                    pid: selected,
                    turnaround: metrics.turnaround,
                    initial_wait: metrics.initial_wait,
                    total_wait: metrics.total_wait,
                });
                collector.record(&metrics);
                ready.remove(index);
                completed += 1;
                ran_consecutively = 0;
            } else if self.policy.on_tick_elapsed(&ready[index], ran_consecutively) {
                /* Quantum expiry: back of the line, quantum refreshed. */
                if let Some(preempted) = ready.remove(index) {
                    ready.push_back(preempted);
                }
                ran_consecutively = 0;
            }

            now = now + 1;
        }

        info!("{}: run complete at {}ms", self.policy.name(), now);

        Ok(RunReport {
            policy: self.policy.name(),
            events,
            summary: collector.summarize(),
            total_time: now,
            service_ticks,
        })
    }

    /// Generous ceiling on loop iterations. Every iteration either
    /// services a burst tick or burns one idle tick waiting for an
    /// arrival, so a run that exceeds this bound has a policy that never
    /// selects an eligible process.
    fn safety_bound(&self, workload: &[ProcessRecord]) -> usize {
        let total_burst: usize = workload.iter().map(|record| record.total_burst()).sum();
        let max_arrival = workload
            .iter()
            .map(|record| record.arrival_time().get())
            .max()
            .unwrap_or(0);

        max_arrival + total_burst + self.config.switch_cost * (workload.len() + 1) + workload.len() + 1
    }
}

/// Stable extraction pass: every pending record that has arrived by
/// `now` moves to the ready-queue tail in arrival order, with a Created
/// event per admission (timestamped with the arrival tick, as the report
/// expects).
fn admit_arrivals(
    pending: &mut Vec<ProcessRecord>,
    ready: &mut VecDeque<ProcessRecord>,
    now: Timestamp,
    events: &mut Vec<SimEvent>,
) {
    let mut still_pending = Vec::with_capacity(pending.len());
    for record in pending.drain(..) {
        if record.arrival_time() <= now {
            events.push(SimEvent::Created {
                time: record.arrival_time(),
                pid: record.pid(),
                burst: record.total_burst(),
            });
            ready.push_back(record);
        } else {
            still_pending.push(record);
        }
    }
    *pending = still_pending;
}
