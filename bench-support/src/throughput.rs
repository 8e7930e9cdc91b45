//! Throughput measurement over a [`WorkloadGenerator`] stream.

use std::fmt;
use std::time::{Duration, Instant};

use cachepair::traits::CoreCache;

use crate::workload::{Operation, WorkloadGenerator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputReport {
    pub operations: u64,
    pub gets: u64,
    pub hits: u64,
    pub misses: u64,
    pub puts: u64,
    pub elapsed: Duration,
}

impl ThroughputReport {
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.operations as f64 / secs
        }
    }

    pub fn mops_per_sec(&self) -> f64 {
        self.ops_per_sec() / 1_000_000.0
    }

    pub fn hit_rate(&self) -> f64 {
        if self.gets == 0 {
            0.0
        } else {
            self.hits as f64 / self.gets as f64
        }
    }
}

impl fmt::Display for ThroughputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ops in {:.3}s: {:.0} ops/sec ({:.2} M ops/sec), hit rate {:.2}%",
            self.operations,
            self.elapsed.as_secs_f64(),
            self.ops_per_sec(),
            self.mops_per_sec(),
            self.hit_rate() * 100.0
        )
    }
}

/// Drives `cache` through every operation `workload` yields and times it.
pub fn run_mixed<C>(cache: &mut C, workload: WorkloadGenerator) -> ThroughputReport
where
    C: CoreCache<u64, u64>,
{
    let mut report = ThroughputReport {
        operations: 0,
        gets: 0,
        hits: 0,
        misses: 0,
        puts: 0,
        elapsed: Duration::ZERO,
    };

    let start = Instant::now();
    for op in workload {
        report.operations += 1;
        match op {
            Operation::Get { key } => {
                report.gets += 1;
                if std::hint::black_box(cache.get(&key)).is_some() {
                    report.hits += 1;
                } else {
                    report.misses += 1;
                }
            },
            Operation::Put { key, value } => {
                report.puts += 1;
                cache.put(key, value);
            },
        }
    }
    report.elapsed = start.elapsed();
    report
}
