use crate::metrics::traits::{CoreMetricsRecorder, LfuMetricsRecorder, LruMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct LruMetrics {
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
}

#[derive(Debug, Default, Clone)]
pub struct LfuMetrics {
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
}

macro_rules! impl_core_recorder {
    ($ty:ty) => {
        impl CoreMetricsRecorder for $ty {
            #[inline]
            fn record_get_hit(&mut self) {
                self.get_calls += 1;
                self.get_hits += 1;
            }

            #[inline]
            fn record_get_miss(&mut self) {
                self.get_calls += 1;
                self.get_misses += 1;
            }

            #[inline]
            fn record_insert_call(&mut self) {
                self.insert_calls += 1;
            }

            #[inline]
            fn record_insert_new(&mut self) {
                self.insert_new += 1;
            }

            #[inline]
            fn record_insert_update(&mut self) {
                self.insert_updates += 1;
            }

            #[inline]
            fn record_evicted_entry(&mut self) {
                self.evicted_entries += 1;
            }

            #[inline]
            fn record_clear(&mut self) {
                self.clear_calls += 1;
            }
        }
    };
}

impl_core_recorder!(LruMetrics);
impl_core_recorder!(LfuMetrics);

impl LruMetricsRecorder for LruMetrics {
    fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }
}

impl LfuMetricsRecorder for LfuMetrics {
    fn record_pop_lfu_call(&mut self) {
        self.pop_lfu_calls += 1;
    }

    fn record_pop_lfu_found(&mut self) {
        self.pop_lfu_found += 1;
    }

    #[inline]
    fn record_frequency_bump(&mut self) {
        self.frequency_bumps += 1;
    }

    fn record_min_freq_advance(&mut self) {
        self.min_freq_advances += 1;
    }
}
