//! # Metrics Trait Hierarchy
//!
//! Mirrors the cache trait design: recording and snapshotting are separate
//! responsibilities, and policy recorders extend a shared core recorder.
//!
//! ```text
//!                  ┌─────────────────────────────┐
//!                  │     CoreMetricsRecorder     │
//!                  │  get_hit/get_miss/insert    │
//!                  │  evict/clear                │
//!                  └──────────────┬──────────────┘
//!                                 │
//!                  ┌──────────────┴──────────────┐
//!                  ▼                             ▼
//!           ┌──────────────┐              ┌──────────────┐
//!           │     Lru      │              │     Lfu      │
//!           │   Recorder   │              │   Recorder   │
//!           └──────────────┘              └──────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │
//!   └──────────────────────────────┘
//! ```

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Metrics for LRU behavior (recency order).
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Metrics for LFU behavior (frequency tiers).
pub trait LfuMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lfu_call(&mut self);
    fn record_pop_lfu_found(&mut self);
    /// A key moved up one frequency tier.
    fn record_frequency_bump(&mut self);
    /// A bump emptied the minimum tier and advanced `min_freq`.
    fn record_min_freq_advance(&mut self);
}

/// Produces a point-in-time copy of a cache's counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
