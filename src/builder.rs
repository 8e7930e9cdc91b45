//! Unified cache builder for both eviction policies.
//!
//! Lets a caller pick the policy at runtime (for example from a config
//! string) and drive the result through one concrete type.
//!
//! ## Example
//!
//! ```rust
//! use cachepair::builder::{CacheBuilder, CachePolicy};
//!
//! let policy: CachePolicy = "lfu".parse().unwrap();
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(policy);
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.policy(), CachePolicy::Lfu);
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::policy::lfu::LfuCache;
use crate::policy::lru::LruCache;
use crate::traits::{CoreCache, MutableCache};

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// Least Recently Used eviction.
    Lru,
    /// Least Frequently Used eviction, recency tie-break.
    Lfu,
}

impl CachePolicy {
    pub const ALL: [CachePolicy; 2] = [CachePolicy::Lru, CachePolicy::Lfu];

    pub fn name(self) -> &'static str {
        match self {
            CachePolicy::Lru => "lru",
            CachePolicy::Lfu => "lfu",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CachePolicy {
    type Err = ConfigError;

    /// Parses `"lru"` or `"lfu"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CachePolicy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "unknown cache policy {:?} (expected \"lru\" or \"lfu\")",
                    s
                ))
            })
    }
}

/// Unified cache wrapper that provides a consistent API regardless of policy.
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: CacheInner<K, V>,
}

#[derive(Debug)]
enum CacheInner<K, V> {
    Lru(LruCache<K, V>),
    Lfu(LfuCache<K, V>),
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Stores a key-value pair, evicting per the policy when full.
    pub fn put(&mut self, key: K, value: V) {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.put(key, value),
            CacheInner::Lfu(lfu) => lfu.put(key, value),
        }
    }

    /// Get a reference to a value by key, recording the access.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.get(key),
            CacheInner::Lfu(lfu) => lfu.get(key),
        }
    }

    /// Get a reference to a value without recording the access.
    pub fn peek(&self, key: &K) -> Option<&V> {
        match &self.inner {
            CacheInner::Lru(lru) => lru.peek(key),
            CacheInner::Lfu(lfu) => lfu.peek(key),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Lru(lru) => lru.contains(key),
            CacheInner::Lfu(lfu) => lfu.contains(key),
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.remove(key),
            CacheInner::Lfu(lfu) => lfu.remove(key),
        }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(lru) => lru.len(),
            CacheInner::Lfu(lfu) => lfu.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the maximum capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(lru) => lru.capacity(),
            CacheInner::Lfu(lfu) => lfu.capacity(),
        }
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.clear(),
            CacheInner::Lfu(lfu) => lfu.clear(),
        }
    }

    /// The policy this cache was built with.
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            CacheInner::Lru(_) => CachePolicy::Lru,
            CacheInner::Lfu(_) => CachePolicy::Lfu,
        }
    }
}

impl<K, V> CoreCache<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn put(&mut self, key: K, value: V) {
        Cache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        Cache::capacity(self)
    }

    fn clear(&mut self) {
        Cache::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        Cache::remove(self, key)
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build a cache with the specified policy.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is too large for the key/value type; use
    /// [`try_build`](Self::try_build) to handle that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cachepair::builder::{CacheBuilder, CachePolicy};
    ///
    /// let lru = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
    /// let lfu = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lfu);
    /// assert_eq!(lru.capacity(), lfu.capacity());
    /// ```
    pub fn build<K, V>(self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build(policy) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible variant of [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity cannot be addressed.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let inner = match policy {
            CachePolicy::Lru => CacheInner::Lru(LruCache::try_new(self.capacity)?),
            CachePolicy::Lfu => CacheInner::Lfu(LfuCache::try_new(self.capacity)?),
        };
        Ok(Cache { inner })
    }
}
