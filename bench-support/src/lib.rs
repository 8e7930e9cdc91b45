//! Benchmark support for cachepair.
//!
//! Workload generation and throughput reporting shared by the criterion
//! benches and the `cache_bench` binary. Kept out of the core crate so the
//! caches themselves stay free of timing and RNG code.

pub mod throughput;
pub mod workload;

pub use throughput::{ThroughputReport, run_mixed};
pub use workload::{KeyDistribution, Operation, WorkloadGenerator, WorkloadSpec};
