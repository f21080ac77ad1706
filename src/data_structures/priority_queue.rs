use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `std::collections::BinaryHeap` for shortest
/// path algorithms. Smallest priority pops first.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Reverse((priority, value)));
    }

    /// Removes and returns the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, value))| (value, priority))
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Eq + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
