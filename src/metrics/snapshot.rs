#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evicted_entries: u64,
    pub clear_calls: u64,

    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfuMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evicted_entries: u64,
    pub clear_calls: u64,

    pub pop_lfu_calls: u64,
    pub pop_lfu_found: u64,
    pub frequency_bumps: u64,
    pub min_freq_advances: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
    pub tier_count: usize,
    pub min_freq: Option<u64>,
}

fn ratio(hits: u64, calls: u64) -> f64 {
    if calls == 0 {
        0.0
    } else {
        hits as f64 / calls as f64
    }
}

impl LruMetricsSnapshot {
    /// Fraction of `get` calls that hit; `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.get_hits, self.get_calls)
    }
}

impl LfuMetricsSnapshot {
    /// Fraction of `get` calls that hit; `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.get_hits, self.get_calls)
    }
}
