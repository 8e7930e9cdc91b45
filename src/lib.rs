//! cachepair: fixed-capacity in-memory caches with O(1) LRU and LFU eviction.
//!
//! Both policies share the same building blocks in [`ds`]: a slot arena that
//! hands out stable [`SlotId`](ds::SlotId) handles, an intrusive recency
//! list, and frequency buckets linked in ascending order. A hash index maps
//! each key to its handle, so `get` and `put` never scan.
//!
//! ```
//! use cachepair::prelude::*;
//!
//! let mut lru = LruCache::new(2);
//! lru.put(1, "a");
//! lru.put(2, "b");
//! lru.get(&1);
//! lru.put(3, "c");
//! assert!(!lru.contains(&2));
//!
//! let mut lfu = LfuCache::new(2);
//! lfu.put("A", 1);
//! lfu.put("B", 2);
//! lfu.get(&"A");
//! lfu.put("C", 3);
//! assert!(!lfu.contains(&"B"));
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
