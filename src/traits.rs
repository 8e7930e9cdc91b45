//! # Cache Trait Hierarchy
//!
//! Uniform interface shared by the recency and frequency caches, so that a
//! workload driver (or any caller) can run either policy through the same
//! code path.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────────────┐
//!                 │            CoreCache<K, V>              │
//!                 │                                         │
//!                 │  put(&mut, K, V)                        │
//!                 │  get(&mut, &K) → Option<&V>             │
//!                 │  contains(&, &K) → bool                 │
//!                 │  len / is_empty / capacity / clear      │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!                                    ▼
//!                 ┌─────────────────────────────────────────┐
//!                 │           MutableCache<K, V>            │
//!                 │  remove(&K) → Option<V>                 │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!               ┌────────────────────┴────────────────────┐
//!               ▼                                         ▼
//!   ┌────────────────────────────┐          ┌────────────────────────────┐
//!   │   LruCacheTrait<K, V>      │          │   LfuCacheTrait<K, V>      │
//!   │                            │          │                            │
//!   │  pop_lru() → (K, V)        │          │  pop_lfu() → (K, V)        │
//!   │  peek_lru() → (&K, &V)     │          │  peek_lfu() → (&K, &V)     │
//!   │  touch(&K) → bool          │          │  frequency(&K) → u64       │
//!   └────────────────────────────┘          └────────────────────────────┘
//! ```
//!
//! ## Policy Comparison
//!
//! | Policy | Eviction Basis                         | Tie-break              |
//! |--------|----------------------------------------|------------------------|
//! | LRU    | Last access                            | n/a                    |
//! | LFU    | Access count (lowest occupied tier)    | Least recently touched |
//!
//! ## Thread Safety
//!
//! Implementations are **not** thread-safe. Mutating calls take `&mut self`;
//! share an instance with `Arc<Mutex<_>>` or similar and hold the lock for
//! the whole call.

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use cachepair::traits::CoreCache;
/// use cachepair::policy::lfu::LfuCache;
/// use cachepair::policy::lru::LruCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.put(*key, value.to_string());
///     }
/// }
///
/// let mut lru = LruCache::new(10);
/// let mut lfu = LfuCache::new(10);
/// warm(&mut lru, &[(1, "one"), (2, "two")]);
/// warm(&mut lfu, &[(1, "one"), (2, "two")]);
/// assert_eq!(CoreCache::len(&lru), CoreCache::len(&lfu));
/// ```
pub trait CoreCache<K, V> {
    /// Stores `value` under `key`.
    ///
    /// Overwrites an existing key in place. For a new key on a full cache,
    /// one entry is evicted first according to the policy. A cache with
    /// capacity 0 ignores every put.
    fn put(&mut self, key: K, value: V);

    /// Looks up `key`, recording the access for the eviction policy on a hit.
    ///
    /// A miss returns `None` and leaves the cache unchanged.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without recording an access.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use cachepair::traits::{CoreCache, MutableCache};
/// use cachepair::policy::lru::LruCache;
///
/// fn invalidate<C: MutableCache<u64, &'static str>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(4);
/// cache.put(1, "one");
/// cache.put(2, "two");
/// invalidate(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Recency-ordered caches.
///
/// # Example
///
/// ```
/// use cachepair::traits::{CoreCache, LruCacheTrait};
/// use cachepair::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(3);
/// cache.put(1, 'a');
/// cache.put(2, 'b');
/// cache.touch(&1);
///
/// assert_eq!(cache.peek_lru(), Some((&2, &'b')));
/// assert_eq!(cache.pop_lru(), Some((2, 'b')));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used entry without changing order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` as most recently used; returns `false` if absent.
    fn touch(&mut self, key: &K) -> bool;
}

/// Frequency-ordered caches.
///
/// # Example
///
/// ```
/// use cachepair::traits::{CoreCache, LfuCacheTrait};
/// use cachepair::policy::lfu::LfuCache;
///
/// let mut cache = LfuCache::new(3);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a");
///
/// assert_eq!(cache.frequency(&"a"), Some(2));
/// assert_eq!(cache.peek_lfu(), Some((&"b", &2)));
/// assert_eq!(cache.pop_lfu(), Some(("b", 2)));
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the entry the next eviction would pick.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Returns the entry the next eviction would pick, without mutation.
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Returns the access count of `key`, if present.
    fn frequency(&self, key: &K) -> Option<u64>;
}
