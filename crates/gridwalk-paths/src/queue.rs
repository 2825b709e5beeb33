//! Minimum-priority queue with first-inserted-wins tie-breaking.
//!
//! Entries are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are dequeued first; among equal priorities the entry
//! enqueued earliest comes out first. The search strategies rely on this
//! order for deterministic paths.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// An entry in the priority queue.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller priority first,
        // then smaller seq.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Error returned when extracting from an empty [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `peek` was called with no entries left.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "priority queue: no entries to extract"),
        }
    }
}

impl std::error::Error for QueueError {}

/// A multiset of `(item, priority)` pairs.
///
/// No deduplication is performed: the same item may be enqueued several
/// times with different priorities, and every entry counts towards
/// [`len`](Self::len) until it is extracted.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P = i32> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    seq: u64,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Add `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove and return the item with the smallest priority.
    ///
    /// Among equal priorities the earliest enqueued item wins.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.pop().ok_or(QueueError::Empty)
    }

    /// The item [`dequeue`](Self::dequeue) would return, without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.heap
            .peek()
            .map(|Reverse(entry)| &entry.item)
            .ok_or(QueueError::Empty)
    }

    /// Remove and return the minimum entry, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Like [`pop`](Self::pop), also returning the priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Number of entries, including duplicates of the same item.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove every entry. The tie-break counter restarts from zero.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_smallest_priority_first() {
        let mut q = PriorityQueue::new();
        q.enqueue("Hello", 5);
        q.enqueue("World", 4);
        q.enqueue("C#", 6);

        assert_eq!(q.dequeue(), Ok("World"));
        assert_eq!(q.dequeue(), Ok("Hello"));
        assert_eq!(q.dequeue(), Ok("C#"));
    }

    #[test]
    fn equal_priorities_come_out_in_insertion_order() {
        let mut q = PriorityQueue::new();
        q.enqueue("first", 1);
        q.enqueue("second", 1);
        q.enqueue("zero", 0);
        q.enqueue("third", 1);

        assert_eq!(q.pop(), Some("zero"));
        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn tie_break_survives_interleaved_dequeues() {
        let mut q = PriorityQueue::new();
        q.enqueue('a', 2);
        q.enqueue('b', 1);
        assert_eq!(q.pop(), Some('b'));
        q.enqueue('c', 2);
        q.enqueue('d', 2);
        assert_eq!(q.pop(), Some('a'));
        assert_eq!(q.pop(), Some('c'));
        assert_eq!(q.pop(), Some('d'));
    }

    #[test]
    fn peek_matches_dequeue_without_removing() {
        let mut q = PriorityQueue::new();
        q.enqueue(10, 3);
        q.enqueue(20, 1);
        q.enqueue(30, 1);
        assert_eq!(q.peek(), Ok(&20));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Ok(20));
        assert_eq!(q.peek(), Ok(&30));
    }

    #[test]
    fn len_tracks_enqueue_and_dequeue() {
        let mut q = PriorityQueue::new();
        for (i, prio) in [4, 2, 2, 9, 0].into_iter().enumerate() {
            q.enqueue(i, prio);
            assert_eq!(q.len(), i + 1);
        }
        for remaining in (0..5).rev() {
            q.dequeue().unwrap();
            assert_eq!(q.count(), remaining);
        }
        assert!(q.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut q = PriorityQueue::new();
        q.enqueue("x", 5);
        q.enqueue("x", 2);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_with_priority(), Some(("x", 2)));
        assert_eq!(q.pop_with_priority(), Some(("x", 5)));
    }

    #[test]
    fn empty_queue_extraction_fails() {
        let mut q: PriorityQueue<&str> = PriorityQueue::new();
        assert_eq!(q.dequeue(), Err(QueueError::Empty));
        assert_eq!(q.peek(), Err(QueueError::Empty));
        assert_eq!(
            QueueError::Empty.to_string(),
            "priority queue: no entries to extract"
        );
    }

    #[test]
    fn clear_and_collect() {
        let mut q: PriorityQueue<char, u8> = [('b', 2), ('a', 1)].into_iter().collect();
        assert_eq!(q.peek(), Ok(&'a'));
        q.clear();
        assert!(q.is_empty());
        q.enqueue('z', 0);
        assert_eq!(q.dequeue(), Ok('z'));
    }
}
