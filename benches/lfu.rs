use cachepair::policy::lfu::LfuCache;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn warmed(capacity: u64) -> LfuCache<u64, u64> {
    let mut cache = LfuCache::new(capacity as usize);
    for i in 0..capacity {
        cache.put(i, i);
    }
    cache
}

fn bench_lfu_put_get(c: &mut Criterion) {
    c.bench_function("lfu_put_get", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// Repeated hits on one key walk it up one tier per call.
fn bench_lfu_frequency_climb(c: &mut Criterion) {
    c.bench_function("lfu_frequency_climb", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for _ in 0..4096u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(7)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// Hits spread across every key, so each bump drains the minimum tier.
fn bench_lfu_tier_sweep(c: &mut Criterion) {
    c.bench_function("lfu_tier_sweep", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for round in 0..4u64 {
                    for i in 0..1024u64 {
                        let _ = std::hint::black_box(cache.get(&(i ^ round)));
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lfu_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_eviction_churn");
    for capacity in [256u64, 4096, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            b.iter_batched(
                || warmed(cap),
                |mut cache| {
                    for i in 0..4096u64 {
                        cache.put(std::hint::black_box(cap + i), i);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_lfu_pop_lfu(c: &mut Criterion) {
    c.bench_function("lfu_pop_lfu", |b| {
        b.iter_batched(
            || {
                let mut cache = warmed(1024);
                for i in (0..1024u64).step_by(3) {
                    cache.get(&i);
                }
                cache
            },
            |mut cache| {
                while let Some(entry) = cache.pop_lfu() {
                    std::hint::black_box(entry);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lfu_put_get,
    bench_lfu_frequency_climb,
    bench_lfu_tier_sweep,
    bench_lfu_eviction_churn,
    bench_lfu_pop_lfu
);
criterion_main!(benches);
