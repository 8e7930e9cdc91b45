//! Eviction policies.
//!
//! - [`lru`]: evicts the least recently used entry.
//! - [`lfu`]: evicts the least frequently used entry, oldest touch first
//!   among equals.

pub mod lfu;
pub mod lru;
