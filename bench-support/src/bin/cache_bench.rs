//! Mixed get/put throughput for both policies.
//!
//! Usage: cache_bench [OPERATIONS] [CAPACITY] [KEY_RANGE]
//!
//! Defaults: 2,000,000 operations, capacity 50,000, keys in [1, 100,000],
//! seed 42.

use std::process::ExitCode;

use bench_support::{WorkloadSpec, run_mixed};
use cachepair::builder::{CacheBuilder, CachePolicy};

const DEFAULT_CAPACITY: usize = 50_000;

fn parse_arg<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    name: &str,
    default: T,
) -> Result<T, String> {
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw
            .replace('_', "")
            .parse()
            .map_err(|_| format!("invalid {}: {:?}", name, raw)),
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = WorkloadSpec::default();

    let spec = WorkloadSpec {
        operations: parse_arg(&args, 0, "operation count", defaults.operations)?,
        key_range: parse_arg(&args, 2, "key range", defaults.key_range)?,
        ..defaults
    };
    let capacity: usize = parse_arg(&args, 1, "capacity", DEFAULT_CAPACITY)?;

    println!(
        "ops={} capacity={} key_range={} seed={}",
        spec.operations, capacity, spec.key_range, spec.seed
    );
    for policy in CachePolicy::ALL {
        let mut cache = CacheBuilder::new(capacity)
            .try_build::<u64, u64>(policy)
            .map_err(|e| e.to_string())?;
        let report = run_mixed(&mut cache, spec.generator());
        println!("{}: {}", policy.name().to_uppercase(), report);
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("cache_bench: {}", message);
            ExitCode::FAILURE
        },
    }
}
