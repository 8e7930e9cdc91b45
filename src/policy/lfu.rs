//! # LFU (Least Frequently Used) Cache Implementation
//!
//! Fixed-capacity cache that evicts the entry with the lowest access count,
//! breaking ties by evicting the least recently touched entry of that count.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────────┐
//!   │                          LfuCache<K, V>                               │
//!   │                                                                       │
//!   │   index: FxHashMap<K, SlotId>        buckets: FrequencyBuckets<Entry> │
//!   │   ┌───────┬────────┐                                                  │
//!   │   │ "a"   │ id_0   │──────────────►  freq=1: [id_2 "c"] ◄► [id_1 "b"] │
//!   │   │ "b"   │ id_1   │──────────────►          MRU          LRU ▲       │
//!   │   │ "c"   │ id_2   │                                         │        │
//!   │   └───────┴────────┘                 freq=3: [id_0 "a"]      │        │
//!   │                                                              │        │
//!   │   min_freq = 1 ─────────────────────────────── victim ───────┘        │
//!   └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//!
//! ```text
//!   get(&key)
//!     hit  → freq += 1, move to head of tier freq, return &value
//!     miss → None (nothing changes)
//!
//!   put(key, value)
//!     capacity == 0   → no-op
//!     key present     → overwrite value, freq += 1
//!     key new, full   → evict tail of tier min_freq, then insert at freq 1
//!     key new, room   → insert at freq 1, min_freq = 1
//! ```
//!
//! Frequencies are counted exactly (no decay) and saturate at `u64::MAX`.
//!
//! ## Performance Characteristics
//!
//! | Operation    | Time | Notes                                 |
//! |--------------|------|---------------------------------------|
//! | `get`        | O(1) | Hash lookup + tier move               |
//! | `put`        | O(1) | Hash insert + tier push (+ min pop)   |
//! | `pop_lfu`    | O(1) | Tail of the minimum tier              |
//! | `remove`     | O(1) | Unlink by handle, follow tier link    |
//! | `frequency`  | O(1) | Read from the entry                   |
//!
//! ## Thread Safety
//!
//! `LfuCache` is **not** thread-safe; wrap it in a lock to share it.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{FrequencyBuckets, SlotId};
use crate::error::{ConfigError, InvariantError, check_capacity};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LfuMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LfuMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, LfuMetricsRecorder, MetricsSnapshotProvider};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

const PREALLOC_LIMIT: usize = 1 << 16;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// LFU cache with recency tie-break inside each frequency tier.
///
/// # Example
///
/// ```
/// use cachepair::policy::lfu::LfuCache;
///
/// let mut cache = LfuCache::new(2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
///
/// // "b" has the lowest count
/// cache.put("c", 3);
/// assert!(!cache.contains(&"b"));
/// assert_eq!(cache.frequency(&"a"), Some(2));
/// assert_eq!(cache.frequency(&"c"), Some(1));
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V> {
    buckets: FrequencyBuckets<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` cannot be addressed by the backing arena.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor; see [`LruCache::try_new`](crate::policy::lru::LruCache::try_new).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a capacity the arena cannot address.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity, FrequencyBuckets::<Entry<K, V>>::max_len())?;
        let prealloc = capacity.min(PREALLOC_LIMIT);
        Ok(Self {
            buckets: FrequencyBuckets::with_capacity(prealloc),
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        })
    }

    /// Returns the value for `key`, counting the access.
    ///
    /// A miss returns `None` and changes nothing.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.bump(id);
        self.buckets.get(id).map(|entry| &entry.value)
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key keeps its slot, takes the new value and counts one
    /// more access. A new key on a full cache first evicts the least
    /// recently touched entry of the lowest frequency. No-op at capacity 0.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.buckets.get_mut(id) {
                entry.value = value;
            }
            self.bump(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return;
        }

        if self.buckets.len() >= self.capacity {
            self.evict_lfu();
        }

        let id = self.buckets.insert(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
    }

    fn bump(&mut self, id: SlotId) {
        #[cfg(feature = "metrics")]
        let min_before = self.buckets.min_freq();

        self.buckets.touch(id);

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_frequency_bump();
            if self.buckets.min_freq() != min_before {
                self.metrics.record_min_freq_advance();
            }
        }
    }

    fn evict_lfu(&mut self) {
        if let Some((entry, _)) = self.buckets.pop_min() {
            self.index.remove(&entry.key);

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }

    /// Returns the value for `key` without counting an access.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.buckets.get(id).map(|entry| &entry.value)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the access count of `key`.
    ///
    /// A fresh insert counts as 1; every hit and every overwrite adds one.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        let id = *self.index.get(key)?;
        self.buckets.frequency(id)
    }

    /// Lowest access count currently held, or `None` when empty.
    pub fn min_frequency(&self) -> Option<u64> {
        self.buckets.min_freq()
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.buckets.remove(id).map(|(entry, _)| entry.value)
    }

    /// Removes and returns the entry the next eviction would pick.
    pub fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let (entry, _) = self.buckets.pop_min()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_found();
        Some((entry.key, entry.value))
    }

    /// Returns the entry the next eviction would pick.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        self.buckets
            .peek_min()
            .map(|(entry, _)| (&entry.key, &entry.value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.buckets.clear();
        self.index.clear();
    }

    /// Verifies that the index, the tier structure and the minimum agree.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.buckets.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but tiers hold {} entries",
                self.index.len(),
                self.buckets.len()
            )));
        }
        if self.buckets.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.buckets.len(),
                self.capacity
            )));
        }
        self.buckets.validate().map_err(InvariantError::new)?;

        for (key, &id) in &self.index {
            match self.buckets.get(id) {
                Some(entry) if &entry.key == key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "slot {:?} holds a different key than its index entry",
                        id
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index points at stale {:?}",
                        id
                    )));
                },
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            frequency_bumps: self.metrics.frequency_bumps,
            min_freq_advances: self.metrics.min_freq_advances,
            cache_len: self.len(),
            capacity: self.capacity,
            tier_count: self.buckets.bucket_count(),
            min_freq: self.buckets.min_freq(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LfuMetricsSnapshot> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LfuMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        LfuCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LfuCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LfuCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn capacity(&self) -> usize {
        LfuCache::capacity(self)
    }

    fn clear(&mut self) {
        LfuCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }
}

impl<K, V> LfuCacheTrait<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        LfuCache::pop_lfu(self)
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        LfuCache::peek_lfu(self)
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        LfuCache::frequency(self, key)
    }
}
