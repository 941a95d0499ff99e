//! Array-backed binary min-heap keyed by an external priority.
//!
//! Unlike [`std::collections::BinaryHeap`], the queue exposes an unordered
//! view of its payloads through [`PriorityQueue::items`], which the searches
//! scan to find an open entry for a given tile.

use crate::error::SearchError;

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    item: T,
}

/// A min-priority queue. Lower priorities are dequeued first.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<Entry<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` with the given priority.
    pub fn enqueue(&mut self, priority: f64, item: T) {
        self.heap.push(Entry { priority, item });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the item with the lowest priority.
    pub fn dequeue(&mut self) -> Result<T, SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyQueue);
        }
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(root.item)
    }

    /// All queued items, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|e| &e.item)
    }

    /// Check the heap property: no parent has a greater priority than either
    /// of its children.
    pub fn is_consistent(&self) -> bool {
        (0..self.heap.len()).all(|i| {
            let p = self.heap[i].priority;
            [2 * i + 1, 2 * i + 2]
                .into_iter()
                .filter(|&c| c < self.heap.len())
                .all(|c| p <= self.heap[c].priority)
        })
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };
            if self.heap[i].priority <= self.heap[child].priority {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}
