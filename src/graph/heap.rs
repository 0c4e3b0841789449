//! Min-cost priority queue of edges

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use crate::graph::Edge;

/// Binary heap that yields the cheapest edge first
///
/// Ties between equal costs break on endpoint indices, which only matters
/// for reproducible logs; the clustering answer does not depend on it.
#[derive(Debug, Clone, Default)]
pub struct EdgeHeap {
    heap: BinaryHeap<Reverse<Edge>>,
}

impl EdgeHeap {
    /// Create an empty heap
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Heapify a batch of edges in O(n)
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            heap: edges.into_iter().map(Reverse).collect(),
        }
    }
    
    /// Insert an edge
    pub fn push(&mut self, edge: Edge) {
        self.heap.push(Reverse(edge));
    }
    
    /// Remove and return the lowest-cost edge
    pub fn pop_min(&mut self) -> Option<Edge> {
        self.heap.pop().map(|Reverse(edge)| edge)
    }
    
    /// Lowest-cost edge without removing it
    pub fn peek_min(&self) -> Option<&Edge> {
        self.heap.peek().map(|Reverse(edge)| edge)
    }
    
    /// Number of edges still queued
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    
    /// Whether every edge has been popped
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    
    /// Consume the heap, returning the unpopped edges in arbitrary order
    pub fn drain_remaining(self) -> Vec<Edge> {
        self.heap.into_iter().map(|Reverse(edge)| edge).collect()
    }
}
