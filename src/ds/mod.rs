//! Arena-backed building blocks shared by the eviction policies.
//!
//! - [`SlotArena`]: dense storage addressed by stable [`SlotId`] handles.
//! - [`IntrusiveList`]: recency order linked through handles.
//! - [`FrequencyBuckets`]: per-frequency recency lists with an O(1) minimum.

pub mod frequency_buckets;
pub mod intrusive_list;
pub mod slot_arena;

pub use frequency_buckets::{DEFAULT_BUCKET_PREALLOC, FrequencyBucketIter, FrequencyBuckets};
pub use intrusive_list::{IntrusiveList, IntrusiveListIter};
pub use slot_arena::{SlotArena, SlotId};
