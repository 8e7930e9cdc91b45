use cachepair::policy::lru::LruCache;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn warmed(capacity: u64) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity as usize);
    for i in 0..capacity {
        cache.put(i, i);
    }
    cache
}

fn bench_lru_put_get(c: &mut Criterion) {
    c.bench_function("lru_put_get", |b| {
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

fn bench_lru_get_hit(c: &mut Criterion) {
    let mut cache = warmed(4096);
    let mut i = 0u64;
    c.bench_function("lru_get_hit", |b| {
        b.iter(|| {
            i = (i + 1) & 4095;
            let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
        })
    });
}

fn bench_lru_get_miss(c: &mut Criterion) {
    let mut cache = warmed(4096);
    c.bench_function("lru_get_miss", |b| {
        b.iter(|| std::hint::black_box(cache.get(&std::hint::black_box(u64::MAX)).is_none()))
    });
}

fn bench_lru_pop_lru(c: &mut Criterion) {
    c.bench_function("lru_pop_lru", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for _ in 0..1024u64 {
                    let _ = std::hint::black_box(cache.pop_lru());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || warmed(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_touch_hotset(c: &mut Criterion) {
    c.bench_function("lru_touch_hotset", |b| {
        b.iter_batched(
            || warmed(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.touch(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_put_get,
    bench_lru_get_hit,
    bench_lru_get_miss,
    bench_lru_pop_lru,
    bench_lru_eviction_churn,
    bench_lru_touch_hotset
);
criterion_main!(benches);
