//! Hit/miss and eviction counters for the cache policies.
//!
//! Compiled only with the `metrics` feature. Caches record into a
//! policy-specific recorder on their mutating paths; callers read a
//! [`snapshot`] through [`MetricsSnapshotProvider`](traits::MetricsSnapshotProvider).

pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
