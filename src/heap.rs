use serde::{Deserialize, Serialize};

use crate::types::Entry;

/// An array-backed binary min-heap.
///
/// Associates an opaque element with an orderable priority and always exposes
/// the element with the smallest priority at the root.
///
/// Complexity:
/// - Push: O(log n)
/// - Pop: O(log n)
/// - Peek: O(1)
///
/// Equal priorities carry no ordering guarantee: elements pushed with the same
/// priority come back in an unspecified relative order.
///
/// Priorities only need [`Ord`]. A priority type whose comparisons panic is
/// outside the supported domain; the heap assumes comparing any two stored
/// priorities is well-defined.
///
/// The heap performs no internal locking. For shared mutation across threads,
/// wrap the whole instance behind a mutex.
///
/// The serialized form is the backing array, which is a valid heap whenever it
/// was produced by `Serialize`. Deserializing hand-edited data that violates
/// the heap order is caller misuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinHeap<T, P> {
    /// Backing storage. The vector length is the logical size; index 0 is the
    /// root and the children of node `i` live at `2i + 1` and `2i + 2`.
    entries: Vec<Entry<T, P>>,
}

impl<T, P> MinHeap<T, P> {
    /// Creates a new empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty heap with pre-sized backing storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry, dropping the stored elements and priorities.
    ///
    /// Clearing an already-empty heap is a no-op.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the element with the smallest priority without removing it.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.element)
    }

    /// Returns the minimum entry (element and priority) without removing it.
    pub fn peek_entry(&self) -> Option<&Entry<T, P>> {
        self.entries.first()
    }

    /// Iterates over the stored entries in arbitrary (storage) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T, P>> {
        self.entries.iter()
    }
}

impl<T, P: Ord> MinHeap<T, P> {
    /// Pushes an element tagged with a priority.
    ///
    /// The entry is appended after the last slot and bubbled up until its
    /// parent is no larger.
    pub fn push(&mut self, element: T, priority: P) {
        self.entries.push(Entry { element, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the element with the smallest priority.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_entry().map(|entry| entry.element)
    }

    /// Removes and returns the minimum entry together with its priority.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop_entry(&mut self) -> Option<Entry<T, P>> {
        self.remove_index(0)
    }

    /// Consumes the heap and returns the elements in ascending priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    /// Removes the entry at `index`, or returns `None` when `index` is past
    /// the last slot.
    ///
    /// The last entry is relocated into the vacated slot and the vector is
    /// truncated by one. The relocated entry is then sifted up if it undercuts
    /// its parent, and otherwise sifted down. The two conditions cannot both
    /// hold when the heap property held on entry.
    fn remove_index(&mut self, index: usize) -> Option<Entry<T, P>> {
        if index >= self.entries.len() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(index, last);
        let removed = self.entries.pop();
        // Removing the last slot is pure truncation; nothing was relocated.
        if index < self.entries.len() {
            if index > 0 && self.entries[index].priority < self.entries[(index - 1) / 2].priority {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }
        removed
    }

    /// Bubbles the entry at `index` up while it is smaller than its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority >= self.entries[parent].priority {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    /// Sinks the entry at `index` down while its smaller child undercuts it.
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.min_child(index) {
            if self.entries[child].priority >= self.entries[index].priority {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }

    /// Returns the child of `index` with the smaller priority, or `None` when
    /// `index` has no children.
    ///
    /// The left child bound is checked before any slot is read, so a slot past
    /// the end is never touched. Equal children resolve to the left one.
    fn min_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        if left >= self.entries.len() {
            return None;
        }
        let right = left + 1;
        if right < self.entries.len() && self.entries[right].priority < self.entries[left].priority
        {
            Some(right)
        } else {
            Some(left)
        }
    }

    /// Restores the heap property over the whole vector, bottom up.
    fn heapify(&mut self) {
        for index in (0..self.entries.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, P> Default for MinHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for MinHeap<T, P> {
    /// Builds a heap from `(element, priority)` pairs with a single bottom-up
    /// heapify pass, which is cheaper than pushing one entry at a time.
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(element, priority)| Entry { element, priority })
            .collect();
        let mut heap = Self { entries };
        heap.heapify();
        heap
    }
}

impl<T, P: Ord> Extend<(T, P)> for MinHeap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (element, priority) in iter {
            self.push(element, priority);
        }
    }
}
