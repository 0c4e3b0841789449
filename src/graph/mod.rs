//! Weighted undirected graph representation

pub mod builder;
pub mod heap;

pub use builder::GraphBuilder;
pub use heap::EdgeHeap;

use std::cmp::Ordering;
use serde::{Serialize, Deserialize};

/// An undirected weighted edge between two dense node indices
///
/// Endpoints are the vertices named on the input line, not cluster leaders;
/// the driver resolves them through the union-find before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the first endpoint
    pub source: u32,
    
    /// Index of the second endpoint
    pub target: u32,
    
    /// Edge cost (distance between the endpoints)
    pub cost: u64,
}

impl Edge {
    /// Create an edge between two node indices
    pub fn new(source: u32, target: u32, cost: u64) -> Self {
        Self { source, target, cost }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Edge-list graph with a mapping from dense indices back to input vertex IDs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// Original vertex IDs, indexed by dense node index
    pub node_ids: Vec<i64>,
    
    /// All edges in input order
    pub edges: Vec<Edge>,
    
    /// Vertex count announced by the input header, if any
    pub declared_vertices: Option<usize>,
}

impl WeightedGraph {
    /// Number of registered vertices
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }
    
    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    
    /// Original ID of the vertex at `index`
    pub fn node_id(&self, index: u32) -> Option<i64> {
        self.node_ids.get(index as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_order_by_cost_first() {
        let cheap = Edge::new(9, 8, 1);
        let dear = Edge::new(0, 1, 5);
        assert!(cheap < dear);
        assert!(Edge::new(0, 1, 5) < Edge::new(0, 2, 5));
    }

    #[test]
    fn node_id_maps_back_to_input() {
        let graph = WeightedGraph {
            node_ids: vec![42, 7],
            edges: vec![Edge::new(0, 1, 3)],
            declared_vertices: Some(2),
        };
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_id(1), Some(7));
        assert_eq!(graph.node_id(2), None);
    }
}
