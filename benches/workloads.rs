//! Workload benchmarks: both policies under identical key streams.
//!
//! Run with: `cargo bench --bench workloads`
//!
//! Each workload is a mixed get/put stream from `bench-support`. Criterion
//! reports elements/sec; hit rates are printed once per workload before
//! timing starts.

use bench_support::{KeyDistribution, WorkloadSpec, run_mixed};
use cachepair::builder::{CacheBuilder, CachePolicy};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const CAPACITY: usize = 4096;
const KEY_RANGE: u64 = 16_384;
const OPS: usize = 200_000;
const SEED: u64 = 42;

fn workloads() -> Vec<(&'static str, KeyDistribution)> {
    vec![
        ("uniform", KeyDistribution::Uniform),
        (
            "hotset_90_10",
            KeyDistribution::Hotset {
                hot_fraction: 0.1,
                hot_prob: 0.9,
            },
        ),
        ("scan", KeyDistribution::Scan),
        ("zipfian_1.0", KeyDistribution::Zipfian { exponent: 1.0 }),
    ]
}

fn spec(distribution: KeyDistribution) -> WorkloadSpec {
    WorkloadSpec {
        operations: OPS,
        key_range: KEY_RANGE,
        distribution,
        seed: SEED,
    }
}

fn bench_workloads(c: &mut Criterion) {
    for (name, distribution) in workloads() {
        let mut group = c.benchmark_group(format!("workload/{}", name));
        group.throughput(Throughput::Elements(OPS as u64));

        for policy in CachePolicy::ALL {
            let mut cache = CacheBuilder::new(CAPACITY).build::<u64, u64>(policy);
            let report = run_mixed(&mut cache, spec(distribution).generator());
            println!(
                "{:<14} {:<4} hit rate {:>6.2}%",
                name,
                policy.name(),
                report.hit_rate() * 100.0
            );

            group.bench_function(BenchmarkId::from_parameter(policy), |b| {
                b.iter_with_large_drop(|| {
                    let mut cache = CacheBuilder::new(CAPACITY).build::<u64, u64>(policy);
                    let report = run_mixed(&mut cache, spec(distribution).generator());
                    (cache, report)
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_workloads
}
criterion_main!(benches);
