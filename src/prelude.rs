pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::ds::{FrequencyBuckets, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::{LfuMetricsSnapshot, LruMetricsSnapshot};
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::policy::lfu::LfuCache;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LfuCacheTrait, LruCacheTrait, MutableCache};
