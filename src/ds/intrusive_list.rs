//! Intrusive doubly linked list backed by `SlotArena`.
//!
//! Nodes live in a [`SlotArena`] and link to each other by [`SlotId`], so a
//! caller can hold a handle to any node and splice it in O(1) without
//! pointer aliasing. This is the recency order of
//! [`LruCache`](crate::policy::lru::LruCache).
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!            MRU                      LRU
//! ```
//!
//! ## Performance
//! - `push_front` / `pop_back`: O(1)
//! - `move_to_front` / `remove`: O(1)
//! - `iter`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    value: T,
}

/// Intrusive list that stores nodes in a `SlotArena` and links them via `SlotId`.
///
/// # Example
///
/// ```
/// use cachepair::ds::IntrusiveList;
///
/// let mut list = IntrusiveList::new();
/// let a = list.push_front("a");
/// list.push_front("b");
/// assert_eq!(list.back(), Some(&"a"));
///
/// list.move_to_front(a);
/// assert_eq!(list.back(), Some(&"b"));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Largest node count the backing arena can address for this `T`.
    pub fn max_len() -> usize {
        crate::error::max_slots::<Node<T>>()
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the value at the front (MRU) of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the front (MRU) of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the value at the back (LRU) of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the SlotId at the back (LRU) of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> IntrusiveListIter<'_, T> {
        IntrusiveListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns the value for a node id, if present.
    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            prev: None,
            next: self.head,
            value,
        });
        if let Some(head) = self.head {
            if let Some(node) = self.arena.get_mut(head) {
                node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = old_head;

        if let Some(old_head) = old_head {
            if let Some(head_node) = self.arena.get_mut(old_head) {
                head_node.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Some(())
    }

    /// Walks head → tail and reports the first broken link, if any.
    pub(crate) fn validate_links(&self) -> Result<(), String> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || !self.is_empty() {
                return Err(format!(
                    "list ends disagree: head={:?} tail={:?} len={}",
                    self.head,
                    self.tail,
                    self.len()
                ));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| format!("stale SlotId {:?} reachable from head", id))?;
            if node.prev != prev {
                return Err(format!("node {:?} has prev {:?}, expected {:?}", id, node.prev, prev));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(format!("walk ended at {:?} but tail is {:?}", id, self.tail));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            if count > self.len() {
                return Err("cycle detected in list".to_string());
            }
        }

        if count != self.len() {
            return Err(format!("walked {} nodes but arena holds {}", count, self.len()));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(msg) = self.validate_links() {
            panic!("intrusive list invariant violated: {}", msg);
        }
    }
}

/// Iterator over values from front (MRU) to back (LRU).
pub struct IntrusiveListIter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for IntrusiveListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}
