//! Frequency buckets for O(1) LFU tracking.
//!
//! Stores payloads in a [`SlotArena`] and threads each one onto the list of
//! its current frequency tier. Callers keep the returned [`SlotId`] (usually
//! in a key index) and drive the structure by handle; the buckets never hash
//! or compare payloads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FrequencyBuckets<T> Layout                        │
//! │                                                                         │
//! │   entries: SlotArena<Entry<T>>                                          │
//! │   ┌──────┬───────────────────────────────┐                              │
//! │   │ Slot │ Entry                         │                              │
//! │   ├──────┼───────────────────────────────┤                              │
//! │   │ id_0 │ freq:2, prev/next, payload A  │                              │
//! │   │ id_1 │ freq:1, prev/next, payload B  │                              │
//! │   │ id_2 │ freq:1, prev/next, payload C  │                              │
//! │   └──────┴───────────────────────────────┘                              │
//! │                                                                         │
//! │   buckets: FxHashMap<u64, Bucket>  (frequency → doubly-linked list)     │
//! │                                                                         │
//! │   min_freq = Some(1)                                                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   freq=1: head ──► [id_2] ◄──► [id_1] ◄── tail                          │
//! │                      MRU          LRU (evict first)                     │
//! │   freq=2: head ──► [id_0] ◄── tail                                      │
//! │                                                                         │
//! │   Bucket links: freq=1 ──next──► freq=2                                 │
//! │                 freq=2 ◄──prev── freq=1                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Touch flow (`touch(id_1)`):
//!   1. Unlink id_1 from the freq=1 list
//!   2. If freq=1 is now empty, drop the bucket; if it was the minimum,
//!      the minimum becomes freq=2 (id_1 is about to live there)
//!   3. Create the freq=2 bucket if needed, linked after freq=1's position
//!   4. Push id_1 to the head of freq=2
//!
//! Eviction flow (`pop_min()`):
//!   1. Take the tail of the `min_freq` bucket
//!   2. If that bucket is now empty, drop it and follow its `next` link to
//!      the new minimum
//!
//! ## Operations
//!
//! | Operation   | Time | Notes                                     |
//! |-------------|------|-------------------------------------------|
//! | `insert`    | O(1) | New entry starts at freq=1, tier head     |
//! | `touch`     | O(1) | freq += 1, moved to head of the new tier  |
//! | `remove`    | O(1) | Unlink by handle                          |
//! | `pop_min`   | O(1) | Tail of the lowest tier                   |
//! | `peek_min`  | O(1) | Same victim as `pop_min`, no mutation     |
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::{SlotArena, SlotId};

/// Link pointers are touched on every list splice, so they lead the layout.
#[derive(Debug)]
#[repr(C)]
struct Entry<T> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    freq: u64,
    payload: T,
}

#[derive(Debug, Default)]
struct Bucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Default bucket pre-allocation for typical frequency distributions.
/// Most entries cluster at low frequencies, so 32 tiers covers most cases.
pub const DEFAULT_BUCKET_PREALLOC: usize = 32;

/// O(1) LFU tier index with recency ordering inside each frequency.
///
/// # Example
///
/// ```
/// use cachepair::ds::FrequencyBuckets;
///
/// let mut freq = FrequencyBuckets::new();
/// let a = freq.insert("a");
/// let _b = freq.insert("b");
/// freq.touch(a);
///
/// assert_eq!(freq.frequency(a), Some(2));
/// assert_eq!(freq.min_freq(), Some(1));
/// assert_eq!(freq.pop_min(), Some(("b", 1)));
/// assert_eq!(freq.min_freq(), Some(2));
/// ```
#[derive(Debug)]
pub struct FrequencyBuckets<T> {
    entries: SlotArena<Entry<T>>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: Option<u64>,
}

impl<T> FrequencyBuckets<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotArena::new(),
            buckets: FxHashMap::default(),
            min_freq: None,
        }
    }

    /// Creates an empty tracker with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SlotArena::with_capacity(capacity),
            buckets: FxHashMap::with_capacity_and_hasher(
                DEFAULT_BUCKET_PREALLOC.min(capacity),
                Default::default(),
            ),
            min_freq: None,
        }
    }

    /// Largest entry count the backing arena can address for this `T`.
    pub fn max_len() -> usize {
        crate::error::max_slots::<Entry<T>>()
    }

    /// Returns the number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of occupied frequency tiers.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.entries.contains(id)
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.entries.get(id).map(|entry| &entry.payload)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.entries.get_mut(id).map(|entry| &mut entry.payload)
    }

    /// Returns the current frequency of `id`.
    #[inline]
    pub fn frequency(&self, id: SlotId) -> Option<u64> {
        self.entries.get(id).map(|entry| entry.freq)
    }

    /// Returns the lowest occupied frequency, or `None` when empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cachepair::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// assert_eq!(freq.min_freq(), None);
    ///
    /// let id = freq.insert(());
    /// freq.touch(id);
    /// freq.touch(id);
    /// assert_eq!(freq.min_freq(), Some(3));
    /// ```
    #[inline]
    pub fn min_freq(&self) -> Option<u64> {
        self.min_freq
    }

    /// Returns the eviction candidate without removing it.
    pub fn peek_min(&self) -> Option<(&T, u64)> {
        let id = self.peek_min_id()?;
        self.entries.get(id).map(|entry| (&entry.payload, entry.freq))
    }

    /// Returns the handle of the eviction candidate.
    pub fn peek_min_id(&self) -> Option<SlotId> {
        let freq = self.min_freq?;
        self.buckets.get(&freq)?.tail
    }

    /// Iterates the payloads of one tier from most to least recently touched.
    ///
    /// # Example
    ///
    /// ```
    /// use cachepair::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// freq.insert('a');
    /// freq.insert('b');
    /// let tier: Vec<_> = freq.iter_bucket(1).copied().collect();
    /// assert_eq!(tier, vec!['b', 'a']);
    /// assert_eq!(freq.iter_bucket(2).count(), 0);
    /// ```
    pub fn iter_bucket(&self, freq: u64) -> FrequencyBucketIter<'_, T> {
        FrequencyBucketIter {
            buckets: self,
            current: self.buckets.get(&freq).and_then(|bucket| bucket.head),
        }
    }

    /// Iterates occupied frequencies in ascending order.
    pub fn frequencies(&self) -> impl Iterator<Item = u64> + '_ {
        std::iter::successors(self.min_freq, move |freq| {
            self.buckets.get(freq).and_then(|bucket| bucket.next)
        })
    }

    /// Iterates every entry as `(SlotId, &payload, freq)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T, u64)> {
        self.entries
            .iter()
            .map(|(id, entry)| (id, &entry.payload, entry.freq))
    }

    /// Adds `payload` at frequency 1 as the most recently touched entry of
    /// that tier and returns its handle.
    pub fn insert(&mut self, payload: T) -> SlotId {
        let id = self.entries.insert(Entry {
            prev: None,
            next: None,
            freq: 1,
            payload,
        });

        if !self.buckets.contains_key(&1) {
            // Tier 1 is always the lowest possible tier, so the old minimum
            // (if any) becomes its successor.
            self.insert_bucket(1, None, self.min_freq);
        }
        self.list_push_front(1, id);
        self.min_freq = Some(1);
        id
    }

    /// Increments the frequency of `id` by one and returns the new value.
    ///
    /// The entry moves to the head of its new tier. Returns `None` for a
    /// stale handle.
    pub fn touch(&mut self, id: SlotId) -> Option<u64> {
        let freq = self.entries.get(id)?.freq;
        if freq == u64::MAX {
            self.list_remove(freq, id)?;
            self.list_push_front(freq, id);
            return Some(freq);
        }
        let next_freq = freq + 1;

        let (prev_existing, next_existing) = {
            let bucket = self.buckets.get(&freq)?;
            (bucket.prev, bucket.next)
        };

        self.list_remove(freq, id)?;
        let emptied = self.bucket_is_empty(freq);
        if emptied {
            self.remove_bucket(freq, prev_existing, next_existing);
        }

        if !self.buckets.contains_key(&next_freq) {
            let prev = if emptied { prev_existing } else { Some(freq) };
            self.insert_bucket(next_freq, prev, next_existing);
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        self.list_push_front(next_freq, id);

        if emptied && self.min_freq == Some(freq) {
            self.min_freq = Some(next_freq);
        }
        Some(next_freq)
    }

    /// Removes `id` and returns its payload and final frequency.
    pub fn remove(&mut self, id: SlotId) -> Option<(T, u64)> {
        let freq = self.entries.get(id)?.freq;
        self.unlink_and_prune(freq, id)?;
        self.entries.remove(id).map(|entry| (entry.payload, entry.freq))
    }

    /// Removes and returns the least recently touched entry of the lowest tier.
    ///
    /// # Example
    ///
    /// ```
    /// use cachepair::ds::FrequencyBuckets;
    ///
    /// let mut freq = FrequencyBuckets::new();
    /// freq.insert("a");
    /// freq.insert("b");
    /// let c = freq.insert("c");
    /// freq.touch(c);
    ///
    /// assert_eq!(freq.pop_min(), Some(("a", 1)));
    /// assert_eq!(freq.pop_min(), Some(("b", 1)));
    /// assert_eq!(freq.pop_min(), Some(("c", 2)));
    /// assert_eq!(freq.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<(T, u64)> {
        let id = self.peek_min_id()?;
        self.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.min_freq = None;
    }

    /// Unlinks `id` from tier `freq`, dropping the tier if it empties and
    /// moving the minimum to the next occupied tier when needed.
    fn unlink_and_prune(&mut self, freq: u64, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let bucket = self.buckets.get(&freq)?;
            (bucket.prev, bucket.next)
        };
        self.list_remove(freq, id)?;

        if self.bucket_is_empty(freq) {
            self.remove_bucket(freq, prev, next);
            if self.min_freq == Some(freq) {
                self.min_freq = next;
            }
        }
        Some(())
    }

    fn bucket_is_empty(&self, freq: u64) -> bool {
        self.buckets
            .get(&freq)
            .map(|bucket| bucket.head.is_none())
            .unwrap_or(true)
    }

    fn insert_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                head: None,
                tail: None,
                prev,
                next,
            },
        );

        if let Some(prev) = prev {
            if let Some(prev_bucket) = self.buckets.get_mut(&prev) {
                prev_bucket.next = Some(freq);
            }
        }
        if let Some(next) = next {
            if let Some(next_bucket) = self.buckets.get_mut(&next) {
                next_bucket.prev = Some(freq);
            }
        }
    }

    fn remove_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        if let Some(prev) = prev {
            if let Some(prev_bucket) = self.buckets.get_mut(&prev) {
                prev_bucket.next = next;
            }
        }
        if let Some(next) = next {
            if let Some(next_bucket) = self.buckets.get_mut(&next) {
                next_bucket.prev = prev;
            }
        }
        self.buckets.remove(&freq);
    }

    fn list_push_front(&mut self, freq: u64, id: SlotId) {
        let Some(bucket) = self.buckets.get_mut(&freq) else {
            debug_assert!(false, "push into missing bucket {}", freq);
            return;
        };

        let old_head = bucket.head;
        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(old_head) = old_head {
            if let Some(entry) = self.entries.get_mut(old_head) {
                entry.prev = Some(id);
            }
        } else {
            bucket.tail = Some(id);
        }
        bucket.head = Some(id);
    }

    fn list_remove(&mut self, freq: u64, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let entry = self.entries.get(id)?;
            (entry.prev, entry.next)
        };

        let bucket = self.buckets.get_mut(&freq)?;
        if let Some(prev) = prev {
            if let Some(entry) = self.entries.get_mut(prev) {
                entry.next = next;
            }
        } else {
            bucket.head = next;
        }
        if let Some(next) = next {
            if let Some(entry) = self.entries.get_mut(next) {
                entry.prev = prev;
            }
        } else {
            bucket.tail = prev;
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
        Some(())
    }

    /// Checks tier links, per-tier lists, and the minimum; returns the first
    /// violation found.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.is_empty() {
            if !self.buckets.is_empty() {
                return Err(format!("{} buckets left with no entries", self.buckets.len()));
            }
            if self.min_freq.is_some() {
                return Err(format!("min_freq {:?} set on empty tracker", self.min_freq));
            }
            return Ok(());
        }

        let Some(min) = self.min_freq else {
            return Err("min_freq unset while entries exist".to_string());
        };
        if !self.buckets.contains_key(&min) {
            return Err(format!("min_freq {} has no bucket", min));
        }

        let mut total = 0usize;
        for (&freq, bucket) in &self.buckets {
            if freq < min {
                return Err(format!("bucket {} below min_freq {}", freq, min));
            }
            if bucket.head.is_none() || bucket.tail.is_none() {
                return Err(format!("bucket {} is empty", freq));
            }
            match bucket.prev {
                Some(prev) => {
                    let linked = self.buckets.get(&prev).and_then(|b| b.next);
                    if prev >= freq || linked != Some(freq) {
                        return Err(format!("bucket {} has bad prev link {}", freq, prev));
                    }
                },
                None if freq != min => {
                    return Err(format!("bucket {} has no prev but min is {}", freq, min));
                },
                None => {},
            }
            if let Some(next) = bucket.next {
                let linked = self.buckets.get(&next).and_then(|b| b.prev);
                if next <= freq || linked != Some(freq) {
                    return Err(format!("bucket {} has bad next link {}", freq, next));
                }
            }

            let mut current = bucket.head;
            let mut last = None;
            while let Some(id) = current {
                let entry = self
                    .entries
                    .get(id)
                    .ok_or_else(|| format!("bucket {} reaches stale {:?}", freq, id))?;
                if entry.freq != freq {
                    return Err(format!(
                        "entry {:?} has freq {} inside bucket {}",
                        id, entry.freq, freq
                    ));
                }
                if entry.prev != last {
                    return Err(format!("entry {:?} prev link broken", id));
                }
                last = Some(id);
                current = entry.next;
                total += 1;
                if total > self.len() {
                    return Err("cycle detected in bucket lists".to_string());
                }
            }
            if bucket.tail != last {
                return Err(format!("bucket {} tail mismatch", freq));
            }
        }

        if total != self.len() {
            return Err(format!(
                "buckets hold {} entries but arena holds {}",
                total,
                self.len()
            ));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(msg) = self.validate() {
            panic!("frequency buckets invariant violated: {}", msg);
        }
    }
}

impl<T> Default for FrequencyBuckets<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one tier, most recently touched first.
pub struct FrequencyBucketIter<'a, T> {
    buckets: &'a FrequencyBuckets<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for FrequencyBucketIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let entry = self.buckets.entries.get(id)?;
        self.current = entry.next;
        Some(&entry.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier<T: Copy>(freq: &FrequencyBuckets<T>, f: u64) -> Vec<T> {
        freq.iter_bucket(f).copied().collect()
    }

    mod basic {
        use super::*;

        #[test]
        fn insert_starts_at_one() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            assert_eq!(freq.frequency(a), Some(1));
            assert_eq!(freq.min_freq(), Some(1));
            assert_eq!(freq.len(), 1);
            assert_eq!(freq.bucket_count(), 1);
            freq.debug_validate_invariants();
        }

        #[test]
        fn newest_insert_is_tier_head() {
            let mut freq = FrequencyBuckets::new();
            freq.insert('a');
            freq.insert('b');
            freq.insert('c');
            assert_eq!(tier(&freq, 1), vec!['c', 'b', 'a']);
            assert_eq!(freq.peek_min(), Some((&'a', 1)));
        }

        #[test]
        fn get_mut_changes_payload_only() {
            let mut freq = FrequencyBuckets::with_capacity(4);
            let a = freq.insert(1);
            if let Some(p) = freq.get_mut(a) {
                *p = 9;
            }
            assert_eq!(freq.get(a), Some(&9));
            assert_eq!(freq.frequency(a), Some(1));
        }
    }

    mod touch {
        use super::*;

        #[test]
        fn touch_increments_by_one() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            assert_eq!(freq.touch(a), Some(2));
            assert_eq!(freq.touch(a), Some(3));
            assert_eq!(freq.frequency(a), Some(3));
            freq.debug_validate_invariants();
        }

        #[test]
        fn touch_sole_min_entry_advances_min() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.touch(a);
            assert_eq!(freq.min_freq(), Some(2));
            assert_eq!(freq.bucket_count(), 1);
            freq.debug_validate_invariants();
        }

        #[test]
        fn touch_keeps_min_while_tier_occupied() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.insert('b');
            freq.touch(a);
            assert_eq!(freq.min_freq(), Some(1));
            assert_eq!(tier(&freq, 1), vec!['b']);
            assert_eq!(tier(&freq, 2), vec!['a']);
            freq.debug_validate_invariants();
        }

        #[test]
        fn touched_entry_becomes_head_of_new_tier() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            let b = freq.insert('b');
            freq.touch(a);
            freq.touch(b);
            assert_eq!(tier(&freq, 2), vec!['b', 'a']);
            assert_eq!(freq.peek_min(), Some((&'a', 2)));
        }

        #[test]
        fn touch_into_existing_higher_tier_relinks() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            let b = freq.insert('b');
            freq.touch(a);
            freq.touch(a);
            // tiers: 1 -> [b], 3 -> [a]
            freq.touch(b);
            // tiers: 2 -> [b], 3 -> [a]
            assert_eq!(freq.frequencies().collect::<Vec<_>>(), vec![2, 3]);
            assert_eq!(freq.min_freq(), Some(2));
            freq.debug_validate_invariants();
        }

        #[test]
        fn touch_stale_handle_is_none() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.remove(a);
            assert_eq!(freq.touch(a), None);
            assert!(freq.is_empty());
            freq.debug_validate_invariants();
        }
    }

    mod removal {
        use super::*;

        #[test]
        fn pop_min_takes_tail_of_lowest_tier() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.insert('b');
            freq.touch(a);
            assert_eq!(freq.pop_min(), Some(('b', 1)));
            assert_eq!(freq.min_freq(), Some(2));
            assert_eq!(freq.pop_min(), Some(('a', 2)));
            assert_eq!(freq.min_freq(), None);
            assert_eq!(freq.pop_min(), None);
            freq.debug_validate_invariants();
        }

        #[test]
        fn remove_min_tier_skips_to_next_occupied() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            let b = freq.insert('b');
            for _ in 0..4 {
                freq.touch(b);
            }
            // tiers: 1 -> [a], 5 -> [b]
            assert_eq!(freq.remove(a), Some(('a', 1)));
            assert_eq!(freq.min_freq(), Some(5));
            freq.debug_validate_invariants();
        }

        #[test]
        fn remove_middle_tier_relinks_neighbours() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            let b = freq.insert('b');
            let _c = freq.insert('c');
            freq.touch(a);
            freq.touch(b);
            freq.touch(b);
            // tiers: 1 -> [c], 2 -> [a], 3 -> [b]
            freq.remove(a);
            assert_eq!(freq.frequencies().collect::<Vec<_>>(), vec![1, 3]);
            freq.debug_validate_invariants();
        }

        #[test]
        fn insert_after_higher_tiers_resets_min() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.touch(a);
            freq.touch(a);
            freq.insert('b');
            assert_eq!(freq.min_freq(), Some(1));
            assert_eq!(freq.frequencies().collect::<Vec<_>>(), vec![1, 3]);
            freq.debug_validate_invariants();
        }

        #[test]
        fn clear_resets_state() {
            let mut freq = FrequencyBuckets::new();
            let a = freq.insert('a');
            freq.touch(a);
            freq.clear();
            assert!(freq.is_empty());
            assert_eq!(freq.min_freq(), None);
            assert_eq!(freq.bucket_count(), 0);
            freq.debug_validate_invariants();
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert,
            Touch(usize),
            Remove(usize),
            PopMin,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => Just(Op::Insert),
                4 => any::<usize>().prop_map(Op::Touch),
                1 => any::<usize>().prop_map(Op::Remove),
                1 => Just(Op::PopMin),
            ]
        }

        proptest! {
            #[test]
            fn min_freq_is_true_minimum(ops in prop::collection::vec(op_strategy(), 0..200)) {
                let mut freq = FrequencyBuckets::new();
                let mut live: Vec<SlotId> = Vec::new();
                let mut next = 0u32;

                for op in ops {
                    match op {
                        Op::Insert => {
                            live.push(freq.insert(next));
                            next += 1;
                        },
                        Op::Touch(i) if !live.is_empty() => {
                            let id = live[i % live.len()];
                            let before = freq.frequency(id).unwrap();
                            prop_assert_eq!(freq.touch(id), Some(before + 1));
                        },
                        Op::Remove(i) if !live.is_empty() => {
                            let id = live.swap_remove(i % live.len());
                            prop_assert!(freq.remove(id).is_some());
                        },
                        Op::PopMin => {
                            let expected = freq.peek_min_id();
                            let popped = freq.pop_min();
                            prop_assert_eq!(expected.is_some(), popped.is_some());
                            if let Some(id) = expected {
                                live.retain(|&l| l != id);
                            }
                        },
                        _ => {},
                    }

                    prop_assert!(freq.validate().is_ok(), "{:?}", freq.validate());
                    prop_assert_eq!(freq.len(), live.len());
                    let true_min = live.iter().filter_map(|&id| freq.frequency(id)).min();
                    prop_assert_eq!(freq.min_freq(), true_min);
                }
            }
        }
    }
}
