use serde::{Deserialize, Serialize};

use crate::heap::MinHeap;

/// A min-heap with a fixed maximum capacity.
///
/// This data structure efficiently tracks the top N highest-priority entries by:
/// 1. Maintaining a min-heap of size N (the N largest entries seen so far)
/// 2. For each new entry, comparing it against the minimum (smallest of the top N)
/// 3. If the new entry is larger, evicting the minimum and inserting the new entry
///
/// Complexity:
/// - Push: O(log N) where N is the capacity
/// - Memory: O(N) instead of O(total entries)
///
/// This is much more efficient than collecting all entries and sorting when only
/// the top N matter out of an arbitrarily long stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedMinHeap<T, P> {
    heap: MinHeap<T, P>,
    capacity: usize,
}

impl<T, P: Ord> BoundedMinHeap<T, P> {
    /// Creates a new bounded min-heap with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: MinHeap::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Attempts to push an entry into the heap.
    ///
    /// If the heap is not full, the entry is added.
    /// If the heap is full and the priority is greater than the current
    /// minimum's, the minimum is evicted and the entry is added.
    /// Otherwise, the entry is discarded.
    ///
    /// A capacity of zero discards every entry.
    pub fn push(&mut self, element: T, priority: P) {
        if self.heap.len() < self.capacity {
            self.heap.push(element, priority);
        } else if let Some(min) = self.heap.peek_entry() {
            if priority > min.priority {
                self.heap.pop();
                self.heap.push(element, priority);
            }
        }
    }

    /// Consumes the heap and returns the elements in descending priority order
    /// (largest first).
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }

    /// Returns the number of entries currently in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_heap_basic() {
        let mut heap = BoundedMinHeap::new(3);

        heap.push("five", 5);
        heap.push("two", 2);
        heap.push("eight", 8);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec!["eight", "five", "two"]);
    }

    #[test]
    fn test_bounded_heap_eviction() {
        let mut heap = BoundedMinHeap::new(3);

        // Fill heap with priorities [5, 2, 8]
        heap.push("five", 5);
        heap.push("two", 2);
        heap.push("eight", 8);

        // Push 10 - should evict 2 (smallest)
        heap.push("ten", 10);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec!["ten", "eight", "five"]);
    }

    #[test]
    fn test_bounded_heap_no_eviction_if_smaller() {
        let mut heap = BoundedMinHeap::new(3);

        heap.push("five", 5);
        heap.push("eight", 8);
        heap.push("ten", 10);

        // Push 1 - should be ignored (smaller than min)
        heap.push("one", 1);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec!["ten", "eight", "five"]);
    }

    #[test]
    fn test_bounded_heap_capacity() {
        let mut heap = BoundedMinHeap::new(5);

        for i in 0..100 {
            heap.push(i, i);
        }

        assert_eq!(heap.len(), 5);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![99, 98, 97, 96, 95]);
    }

    #[test]
    fn test_bounded_heap_empty() {
        let heap: BoundedMinHeap<i32, i32> = BoundedMinHeap::new(10);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, Vec::<i32>::new());
    }

    #[test]
    fn test_bounded_heap_single_item() {
        let mut heap = BoundedMinHeap::new(5);
        heap.push("answer", 42);

        assert_eq!(heap.len(), 1);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec!["answer"]);
    }

    #[test]
    fn test_bounded_heap_zero_capacity() {
        let mut heap = BoundedMinHeap::new(0);
        heap.push("ignored", 100);

        assert!(heap.is_empty());
        assert_eq!(heap.into_sorted_vec(), Vec::<&str>::new());
    }

    #[test]
    fn test_bounded_heap_duplicate_priorities() {
        let mut heap = BoundedMinHeap::new(2);

        heap.push("a", 5);
        heap.push("b", 5);
        heap.push("c", 5);

        // A tying entry never evicts; the first two survive in some order.
        let mut sorted = heap.into_sorted_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b"]);
    }
}
