//! A min-heap priority queue with deterministic tie-breaking.
//!
//! Every push is stamped with a sequence number. Entries with equal
//! priority are ordered by that sequence according to [`TieBreak`], so the
//! pop order is fully determined by the push order.

use std::cmp::Ordering;

/// Order among entries of equal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The earliest-pushed entry pops first.
    #[default]
    Fifo,
    /// The most recently pushed entry pops first.
    Lifo,
}

/// An entry in the priority queue.
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    priority: u64,
    seq: u64,
    data: T,
}

/// A min-heap priority queue that pops the lowest-priority element first.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    nodes: Vec<HeapEntry<T>>,
    next_seq: u64,
    tie_break: TieBreak,
}

impl<T> MinHeap<T> {
    /// Create a new, empty min-heap with FIFO tie-breaking.
    pub fn new() -> Self {
        Self::with_tie_break(TieBreak::Fifo)
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        MinHeap {
            nodes: Vec::new(),
            next_seq: 0,
            tie_break,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Push an element onto the heap with the given priority.
    pub fn push(&mut self, priority: u64, data: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.nodes.push(HeapEntry {
            priority,
            seq,
            data,
        });
        self.sift_up(self.nodes.len() - 1);
    }

    /// Pop the minimum-priority element along with its priority.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<(u64, T)> {
        if self.nodes.is_empty() {
            return None;
        }
        // Swap root with last, remove last, sift down root
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let result = self.nodes.pop()?;
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Some((result.priority, result.data))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.nodes[a], &self.nodes[b]);
        let by_seq = match self.tie_break {
            TieBreak::Fifo => a.seq.cmp(&b.seq),
            TieBreak::Lifo => b.seq.cmp(&a.seq),
        };
        a.priority.cmp(&b.priority).then(by_seq) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.nodes.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
