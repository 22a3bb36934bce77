use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::search::types::Cost;

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub priority: Cost,
    pub sequence: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority queue keyed by accumulated cost.
///
/// Equal priorities pop in insertion order. There is no decrease-key:
/// callers push again and discard stale entries when they pop them.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_sequence: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, priority: Cost) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            sequence,
            item,
        }));
    }

    /// Remove and return the item with the smallest priority
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    pub fn pop_with_priority(&mut self) -> Option<(T, Cost)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
