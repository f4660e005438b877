use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Pid, ProcessRecord, Timestamp};

/// Shape of a generated workload. The defaults mirror the classic
/// exercise constants: bursts uniform in [500, 4000), priorities in
/// [0, 5), one process in five arriving at tick zero and the rest on an
/// exponential clock capped at 8000ms.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub processes: usize,
    /// Fraction of the workload that arrives at tick 0.
    pub zero_arrival_fraction: f64,
    /// Rate of the exponential arrival distribution.
    pub lambda: f64,
    /// Arrival draws beyond this tick are re-sampled to bound the
    /// simulation length.
    pub arrival_cap: usize,
    /// Re-draws allowed per record before the cap is declared
    /// unreachable.
    pub resample_limit: usize,
    /// Smallest possible burst.
    pub min_burst: usize,
    /// Bursts are uniform over [min_burst, min_burst + burst_span).
    pub burst_span: usize,
    /// Priorities are uniform over [0, max_priority).
    pub max_priority: u8,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig {
            processes: 20,
            zero_arrival_fraction: 0.2,
            lambda: 0.001,
            arrival_cap: 8000,
            resample_limit: 1000,
            min_burst: 500,
            burst_span: 3500,
            max_priority: 5,
        }
    }
}

/// Generates `config.processes` records from the given seed, sorted by
/// arrival time with pids reassigned 1..N in that order. Identical seed
/// and config always produce the identical workload.
pub fn generate(config: &WorkloadConfig, seed: u64) -> Result<Vec<ProcessRecord>, Error> {
    if config.burst_span == 0 {
        return Err(Error::InvalidConfig {
            reason: "burst_span must be at least 1",
        });
    }
    if config.max_priority == 0 {
        return Err(Error::InvalidConfig {
            reason: "max_priority must be at least 1",
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let zero_arrivals = (config.processes as f64 * config.zero_arrival_fraction) as usize;

    let mut records = Vec::with_capacity(config.processes);
    for id in 0..config.processes {
        let arrival = if id < zero_arrivals {
            0
        } else {
            sample_arrival(&mut rng, config)?
        };
        let burst = config.min_burst + rng.gen_range(0..config.burst_span);
        let priority = rng.gen_range(0..config.max_priority);
        records.push(ProcessRecord::new(
            Pid::new(id + 1),
            Timestamp::new(arrival),
            burst,
            priority,
        ));
    }

    /* Stable sort keeps generation order for equal arrivals, so the
    reassigned pids follow arrival order with deterministic ties. */
    records.sort_by_key(|record| record.arrival_time());
    for (index, record) in records.iter_mut().enumerate() {
        record.reassign_pid(Pid::new(index + 1));
    }

    debug!(
        "generated workload of {} processes from seed {}",
        config.processes, seed
    );

    Ok(records)
}

/// Inverse-transform sample of Exp(lambda), re-drawn while it lands past
/// the arrival cap. The retry ceiling turns a cap that the rate cannot
/// reach into a reported configuration error instead of a spin.
fn sample_arrival(rng: &mut StdRng, config: &WorkloadConfig) -> Result<usize, Error> {
    for _ in 0..config.resample_limit {
        let u: f64 = rng.gen();
        let arrival = -u.ln() / config.lambda;
        if arrival <= config.arrival_cap as f64 {
            return Ok(arrival as usize);
        }
    }

    Err(Error::ArrivalResampleExhausted {
        attempts: config.resample_limit,
        cap: config.arrival_cap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_means_same_workload() {
        let config = WorkloadConfig::default();
        let first = generate(&config, 42).unwrap();
        let second = generate(&config, 42).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.pid(), b.pid());
            assert_eq!(a.arrival_time(), b.arrival_time());
            assert_eq!(a.total_burst(), b.total_burst());
            assert_eq!(a.priority(), b.priority());
        }
    }

    #[test]
    fn workload_is_sorted_with_pids_in_arrival_order() {
        let workload = generate(&WorkloadConfig::default(), 7).unwrap();

        for (index, record) in workload.iter().enumerate() {
            assert_eq!(record.pid().get(), index + 1);
            if index > 0 {
                assert!(workload[index - 1].arrival_time() <= record.arrival_time());
            }
        }
    }

    #[test]
    fn values_respect_configured_bounds() {
        let config = WorkloadConfig::default();
        let workload = generate(&config, 99).unwrap();

        let zero_arrivals = workload
            .iter()
            .filter(|record| record.arrival_time().get() == 0)
            .count();
        // 20% get arrival 0 by construction; exponential draws may add
        // a few more.
        assert!(zero_arrivals >= 4);

        for record in &workload {
            assert!(record.arrival_time().get() <= config.arrival_cap);
            assert!(record.total_burst() >= config.min_burst);
            assert!(record.total_burst() < config.min_burst + config.burst_span);
            assert!(record.priority() < config.max_priority);
        }
    }

    #[test]
    fn unreachable_cap_is_a_configuration_error() {
        let config = WorkloadConfig {
            lambda: 1e-9,
            arrival_cap: 10,
            resample_limit: 8,
            ..WorkloadConfig::default()
        };

        match generate(&config, 1) {
            Err(Error::ArrivalResampleExhausted { attempts, cap }) => {
                assert_eq!(attempts, 8);
                assert_eq!(cap, 10);
            }
            other => panic!("expected resample exhaustion, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn zero_burst_span_is_rejected() {
        let config = WorkloadConfig {
            burst_span: 0,
            ..WorkloadConfig::default()
        };
        assert!(matches!(
            generate(&config, 1),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
