//! # LRU (Least Recently Used) Cache Implementation
//!
//! Fixed-capacity cache that evicts the entry whose last access is oldest.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                                  │
//!   │                                                                          │
//!   │   index: FxHashMap<K, SlotId>                                            │
//!   │   ┌─────────┬────────┐                                                   │
//!   │   │  Key    │ SlotId │                                                   │
//!   │   ├─────────┼────────┤                                                   │
//!   │   │ page_1  │  id_0  │──┐                                                │
//!   │   │ page_2  │  id_1  │──┼──┐                                             │
//!   │   │ page_3  │  id_2  │──┼──┼──┐                                          │
//!   │   └─────────┴────────┘  │  │  │                                          │
//!   │                         ▼  ▼  ▼                                          │
//!   │   list: IntrusiveList<Entry<K, V>>   (arena nodes linked by SlotId)      │
//!   │                                                                          │
//!   │   head ─► [id_2: page_3] ◄──► [id_0: page_1] ◄──► [id_1: page_2] ◄─ tail │
//!   │            MRU                                      LRU (evict first)    │
//!   │                                                                          │
//!   │   capacity: usize                                                        │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//!
//! ```text
//!   get(&key)
//!     hit  → move node to head, return &value
//!     miss → None (nothing changes)
//!
//!   put(key, value)
//!     capacity == 0   → no-op
//!     key present     → overwrite value, move node to head
//!     key new, full   → pop tail + drop its index entry, then push at head
//!     key new, room   → push at head
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation    | Time | Notes                               |
//! |--------------|------|-------------------------------------|
//! | `get`        | O(1) | Hash lookup + list splice           |
//! | `put`        | O(1) | Hash insert + push (+ tail pop)     |
//! | `peek`       | O(1) | No recency update                   |
//! | `remove`     | O(1) | Unlink by handle                    |
//! | `pop_lru`    | O(1) | Tail pop                            |
//! | `iter`       | O(n) | MRU → LRU                           |
//!
//! ## Thread Safety
//!
//! - `LruCache` is **NOT thread-safe**
//! - Wrap in `Arc<Mutex<LruCache>>` for shared access; hold the lock for the
//!   whole `get`/`put` call
//!
//! ## Implementation Notes
//!
//! - **Key Clone Requirement**: Keys are stored in both the index and the node
//!   so eviction can clear the index without a reverse lookup
//! - **Zero Capacity**: Supported - every put is ignored
//! - **Handles**: Freed list slots are recycled, so a full cache at steady
//!   state does not allocate

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError, check_capacity};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, LruMetricsRecorder, MetricsSnapshotProvider};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Upper bound on slots reserved up front; larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1 << 16;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// LRU (Least Recently Used) cache.
///
/// # Example
///
/// ```
/// use cachepair::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put(1, "a");
/// cache.put(2, "b");
/// assert_eq!(cache.get(&1), Some(&"a"));
///
/// // 2 is now least recently used
/// cache.put(3, "c");
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.get(&1), Some(&"a"));
/// assert_eq!(cache.get(&3), Some(&"c"));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    list: IntrusiveList<Entry<K, V>>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` cannot be addressed by the backing arena. See
    /// [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache, returning an error on an unrepresentable capacity.
    ///
    /// Capacity 0 is valid and yields a cache that never stores anything.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` exceeds the number of nodes the
    /// backing arena can hold for this key/value type.
    ///
    /// # Example
    ///
    /// ```
    /// use cachepair::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u64, u64>::try_new(0).is_ok());
    /// assert!(LruCache::<u64, u64>::try_new(usize::MAX).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity, IntrusiveList::<Entry<K, V>>::max_len())?;
        let prealloc = capacity.min(PREALLOC_LIMIT);
        Ok(Self {
            list: IntrusiveList::with_capacity(prealloc),
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` without touching any internal state.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Overwrites in place if `key` exists. Otherwise, on a full cache, the
    /// least recently used entry is evicted first. No-op at capacity 0.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            self.list.move_to_front(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return;
        }

        if self.list.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();
    }

    /// Returns the value for `key` without changing recency.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached. Does not change recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|entry| entry.value)
    }

    /// Marks `key` as most recently used; returns `false` if absent.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();
        true
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();
        Some((entry.key, entry.value))
    }

    /// Returns the least recently used entry without changing order.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the most recently used entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates entries from most to least recently used.
    ///
    /// # Example
    ///
    /// ```
    /// use cachepair::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.put('a', 1);
    /// cache.put('b', 2);
    /// cache.put('c', 3);
    /// cache.get(&'a');
    ///
    /// let keys: Vec<char> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec!['a', 'c', 'b']);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.list.clear();
        self.index.clear();
    }

    fn evict_lru(&mut self) {
        if let Some(entry) = self.list.pop_back() {
            self.index.remove(&entry.key);

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }

    /// Verifies that the index, recency list, and capacity bound agree.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {}",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        self.list.validate_links().map_err(InvariantError::new)?;

        for (key, &id) in &self.index {
            let entry = self
                .list
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("index points at stale {:?}", id)))?;
            if &entry.key != key {
                return Err(InvariantError::new(format!(
                    "slot {:?} holds a different key than its index entry",
                    id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            cache_len: self.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }
}
