//! DHAT heap profiler for the LRU and LFU caches.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use cachepair::builder::{CacheBuilder, CachePolicy};
use cachepair::traits::CoreCache;

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// XorShift64 keeps the profiled binary free of RNG allocations.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// 90% of accesses go to the first 10% of keys; misses are filled.
fn hotset_workload<C: CoreCache<u64, u64>>(cache: &mut C, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = UNIVERSE / 10;

    for _ in 0..OPERATIONS {
        let roll = rng.next_u64() % 10;
        let key = if roll < 9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + rng.next_u64() % (UNIVERSE - hot_size)
        };

        if cache.get(&key).is_none() {
            cache.put(key, key);
        }
    }
}

/// Sequential sweep over the whole universe.
fn scan_workload<C: CoreCache<u64, u64>>(cache: &mut C, operations: usize) {
    for i in 0..operations {
        let key = i as u64 % UNIVERSE;
        if cache.get(&key).is_none() {
            cache.put(key, key);
        }
    }
}

/// Fresh keys only: every put past capacity evicts.
fn eviction_churn<C: CoreCache<u64, u64>>(cache: &mut C, operations: usize) {
    let base = UNIVERSE;
    for i in 0..operations as u64 {
        cache.put(base + i, i);
    }
}

fn profile(policy: CachePolicy) {
    println!("=== Profiling {} ===", policy.name().to_uppercase());

    let mut cache = CacheBuilder::new(CAPACITY).build::<u64, u64>(policy);
    for i in 0..CAPACITY as u64 {
        cache.put(i, i);
    }

    hotset_workload(&mut cache, 42);
    scan_workload(&mut cache, OPERATIONS / 2);
    eviction_churn(&mut cache, OPERATIONS / 4);

    println!("  Final size: {}", cache.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("cachepair DHAT Heap Profiling");
    println!("=============================\n");

    for policy in CachePolicy::ALL {
        profile(policy);
    }

    println!("\n=============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
