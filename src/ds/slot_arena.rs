//! Dense slot storage addressed by stable handles.
//!
//! Every linked structure in this crate keeps its nodes in a `SlotArena` and
//! refers to them by [`SlotId`] instead of pointers. A handle stays valid
//! until its slot is removed; freed slots are recycled through a free list,
//! so a long-running cache at steady state performs no allocation.
//!
//! ```text
//!   slots:     [ Some(a) | None | Some(c) | Some(d) ]
//!                  0        1       2         3
//!   free_list: [ 1 ]     ◄── next insert lands in slot 1
//! ```

/// Stable handle to a value stored in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Vec-backed arena with free-slot reuse.
///
/// # Example
///
/// ```
/// use cachepair::ds::SlotArena;
///
/// let mut arena = SlotArena::new();
/// let a = arena.insert("a");
/// assert_eq!(arena.get(a), Some(&"a"));
/// assert_eq!(arena.remove(a), Some("a"));
/// assert!(arena.is_empty());
/// ```
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` live slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Removes the value at `id`. Returns `None` for stale or unknown handles.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots allocated (live + free + unused reserve).
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterates live `(SlotId, &T)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
    }

    #[test]
    fn slot_arena_double_remove_is_none() {
        let mut arena = SlotArena::new();
        let id = arena.insert(7);
        assert_eq!(arena.remove(id), Some(7));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.len(), 0);
        assert!(!arena.contains(id));
    }

    #[test]
    fn slot_arena_unknown_handle_misses() {
        let mut arena: SlotArena<u32> = SlotArena::new();
        assert_eq!(arena.get(SlotId(42)), None);
        assert_eq!(arena.get_mut(SlotId(42)), None);
        assert_eq!(arena.remove(SlotId(42)), None);
    }

    #[test]
    fn slot_arena_get_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        let id = arena.insert(String::from("old"));
        if let Some(value) = arena.get_mut(id) {
            value.push_str("-new");
        }
        assert_eq!(arena.get(id).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn slot_arena_iter_skips_free_slots() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let _b = arena.insert(2);
        let _c = arena.insert(3);
        arena.remove(a);

        let values: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn slot_arena_clear_resets() {
        let mut arena = SlotArena::with_capacity(8);
        assert!(arena.capacity() >= 8);
        arena.insert(1);
        arena.insert(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.iter().count(), 0);
    }
}
