use std::fmt;

use crate::process::CompletionMetrics;

/// Running count/sum/min/max over one metric.
#[derive(Clone, Copy, Debug, Default)]
struct MetricAccumulator {
    count: usize,
    sum: usize,
    min: usize,
    max: usize,
}

impl MetricAccumulator {
    fn record(&mut self, value: usize) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    fn summary(&self) -> MetricSummary {
        if self.count == 0 {
            return MetricSummary {
                min: 0.0,
                avg: 0.0,
                max: 0.0,
            };
        }

        MetricSummary {
            min: self.min as f64,
            avg: self.sum as f64 / self.count as f64,
            max: self.max as f64,
        }
    }
}

/// Min/avg/max of one metric over a completed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Per-run statistics. Each policy run gets its own collector; nothing
/// is shared across runs, so a forgotten `reset` can never leak one
/// run's figures into the next.
#[derive(Clone, Debug, Default)]
pub struct Collector {
    turnaround: MetricAccumulator,
    initial_wait: MetricAccumulator,
    total_wait: MetricAccumulator,
}

impl Collector {
    pub fn new() -> Collector {
        Collector::default()
    }

    /// Folds one completion into the aggregates.
    pub fn record(&mut self, metrics: &CompletionMetrics) {
        self.turnaround.record(metrics.turnaround);
        self.initial_wait.record(metrics.initial_wait);
        self.total_wait.record(metrics.total_wait);
    }

    /// Completions recorded so far.
    pub fn completed(&self) -> usize {
        self.turnaround.count
    }

    pub fn summarize(&self) -> RunSummary {
        RunSummary {
            turnaround: self.turnaround.summary(),
            initial_wait: self.initial_wait.summary(),
            total_wait: self.total_wait.summary(),
        }
    }

    /// Clears the aggregates so the collector can serve another run.
    pub fn reset(&mut self) {
        *self = Collector::default();
    }
}

/// The three summary lines of a policy run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub turnaround: MetricSummary,
    pub initial_wait: MetricSummary,
    pub total_wait: MetricSummary,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Turnaround time: min {:.3}ms; avg {:.3}ms; max {:.3}ms",
            self.turnaround.min, self.turnaround.avg, self.turnaround.max
        )?;
        writeln!(
            f,
            "Initial wait time: min {:.3}ms; avg {:.3}ms; max {:.3}ms",
            self.initial_wait.min, self.initial_wait.avg, self.initial_wait.max
        )?;
        write!(
            f,
            "Total wait time: min {:.3}ms; avg {:.3}ms; max {:.3}ms",
            self.total_wait.min, self.total_wait.avg, self.total_wait.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(turnaround: usize, total_wait: usize, initial_wait: usize) -> CompletionMetrics {
        CompletionMetrics {
            turnaround,
            total_wait,
            initial_wait,
        }
    }

    #[test]
    fn aggregates_track_min_avg_max() {
        let mut collector = Collector::new();
        collector.record(&metrics(100, 10, 5));
        collector.record(&metrics(300, 50, 0));
        collector.record(&metrics(200, 30, 10));

        let summary = collector.summarize();
        assert_eq!(collector.completed(), 3);
        assert_eq!(summary.turnaround.min, 100.0);
        assert_eq!(summary.turnaround.avg, 200.0);
        assert_eq!(summary.turnaround.max, 300.0);
        assert_eq!(summary.total_wait.avg, 30.0);
        assert_eq!(summary.initial_wait.min, 0.0);
        assert_eq!(summary.initial_wait.max, 10.0);
    }

    #[test]
    fn reset_clears_previous_run() {
        let mut collector = Collector::new();
        collector.record(&metrics(5000, 100, 100));
        collector.reset();

        assert_eq!(collector.completed(), 0);
        collector.record(&metrics(10, 1, 1));
        let summary = collector.summarize();
        assert_eq!(summary.turnaround.max, 10.0);
    }

    #[test]
    fn summary_prints_three_decimal_lines() {
        let mut collector = Collector::new();
        collector.record(&metrics(100, 10, 5));
        collector.record(&metrics(101, 11, 6));

        let text = collector.summarize().to_string();
        assert_eq!(
            text,
            "Turnaround time: min 100.000ms; avg 100.500ms; max 101.000ms\n\
             Initial wait time: min 5.000ms; avg 5.500ms; max 6.000ms\n\
             Total wait time: min 10.000ms; avg 10.500ms; max 11.000ms"
        );
    }
}
