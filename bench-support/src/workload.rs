//! Deterministic key streams for driving the caches.
//!
//! A [`WorkloadGenerator`] yields a mixed stream of [`Operation`]s: even
//! steps read a key, odd steps write one. Keys are drawn from
//! `[1, key_range]` with a seeded [`SmallRng`], so two runs with the same
//! [`WorkloadSpec`] issue the same sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Zipf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyDistribution {
    /// Every key in `[1, key_range]` equally likely.
    Uniform,
    /// `hot_prob` of draws land in the first `hot_fraction` of the range.
    Hotset { hot_fraction: f64, hot_prob: f64 },
    /// Zipfian skew; `exponent` near 1.0 models typical web traffic.
    Zipfian { exponent: f64 },
    /// Keys 1, 2, ..., key_range, 1, 2, ...
    Scan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadSpec {
    pub operations: usize,
    pub key_range: u64,
    pub distribution: KeyDistribution,
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            operations: 2_000_000,
            key_range: 100_000,
            distribution: KeyDistribution::Uniform,
            seed: 42,
        }
    }
}

impl WorkloadSpec {
    pub fn generator(self) -> WorkloadGenerator {
        WorkloadGenerator::new(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get { key: u64 },
    Put { key: u64, value: u64 },
}

impl Operation {
    pub fn key(self) -> u64 {
        match self {
            Operation::Get { key } | Operation::Put { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    key_range: u64,
    distribution: KeyDistribution,
    remaining: usize,
    step: u64,
    scan_pos: u64,
    rng: SmallRng,
    zipf: Option<Zipf<f64>>,
}

impl WorkloadGenerator {
    pub fn new(spec: WorkloadSpec) -> Self {
        let key_range = spec.key_range.max(1);
        let zipf = match spec.distribution {
            KeyDistribution::Zipfian { exponent } => {
                Zipf::new(key_range as f64, exponent.max(0.0)).ok()
            },
            _ => None,
        };
        Self {
            key_range,
            distribution: spec.distribution,
            remaining: spec.operations,
            step: 0,
            scan_pos: 0,
            rng: SmallRng::seed_from_u64(spec.seed),
            zipf,
        }
    }

    /// Draws the next key in `[1, key_range]`.
    pub fn next_key(&mut self) -> u64 {
        match self.distribution {
            KeyDistribution::Uniform => self.rng.random_range(1..=self.key_range),
            KeyDistribution::Hotset {
                hot_fraction,
                hot_prob,
            } => {
                let hot_size = ((self.key_range as f64) * hot_fraction.clamp(0.0, 1.0)).round();
                let hot_size = (hot_size as u64).clamp(1, self.key_range);
                if self.rng.random::<f64>() < hot_prob.clamp(0.0, 1.0) || hot_size == self.key_range
                {
                    self.rng.random_range(1..=hot_size)
                } else {
                    self.rng.random_range(hot_size + 1..=self.key_range)
                }
            },
            KeyDistribution::Zipfian { .. } => match &self.zipf {
                Some(zipf) => (zipf.sample(&mut self.rng) as u64).clamp(1, self.key_range),
                None => self.rng.random_range(1..=self.key_range),
            },
            KeyDistribution::Scan => {
                let key = self.scan_pos + 1;
                self.scan_pos = (self.scan_pos + 1) % self.key_range;
                key
            },
        }
    }

    /// Number of operations not yet yielded.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for WorkloadGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let step = self.step;
        self.step += 1;
        let key = self.next_key();
        if step % 2 == 0 {
            Some(Operation::Get { key })
        } else {
            Some(Operation::Put { key, value: step })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WorkloadGenerator {}
