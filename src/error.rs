//! Error types for the cachepair library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache cannot be constructed with the
//!   requested parameters (e.g. a capacity the backing arena cannot address,
//!   or an unknown policy name).
//! - [`InvariantError`]: Returned by `check_invariants` when the recency
//!   order, frequency tiers, or key index disagree with each other.
//!
//! A cache miss is never an error: `get` reports it as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use cachepair::error::ConfigError;
//! use cachepair::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<u64, i32>, ConfigError> = LruCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<u64, i32>::try_new(usize::MAX);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)
/// and [`LfuCache::check_invariants`](crate::policy::lfu::LfuCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::try_new`](crate::policy::lru::LruCache::try_new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use cachepair::policy::lfu::LfuCache;
///
/// let err = LfuCache::<u64, u64>::try_new(usize::MAX).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Largest number of slots an arena of `T` nodes can hold.
///
/// A `Vec` may never exceed `isize::MAX` bytes, so a capacity above this
/// bound could never be honored and is rejected at construction time.
pub(crate) fn max_slots<T>() -> usize {
    let size = std::mem::size_of::<Option<T>>().max(1);
    isize::MAX as usize / size
}

/// Rejects a capacity larger than `max` slots.
pub(crate) fn check_capacity(capacity: usize, max: usize) -> Result<(), ConfigError> {
    if capacity > max {
        return Err(ConfigError::new(format!(
            "cache capacity {} exceeds the maximum of {} entries for this key/value type",
            capacity, max
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
