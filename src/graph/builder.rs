//! Graph construction module

use std::collections::HashMap;
use crate::graph::{Edge, WeightedGraph};

/// Upper bound on vertices preallocated from a capacity hint
const MAX_PREALLOCATED_NODES: usize = 1 << 20;

/// Builder for incrementally constructing a WeightedGraph
pub struct GraphBuilder {
    /// Mapping from input vertex IDs to node indices
    id_to_index: HashMap<i64, u32>,
    
    /// Input vertex IDs in first-appearance order
    node_ids: Vec<i64>,
    
    /// Edges collected so far
    edges: Vec<Edge>,
    
    /// Vertex count from the input header
    declared_vertices: Option<usize>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    ///
    /// The capacity is only a hint and is capped at `MAX_PREALLOCATED_NODES`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_PREALLOCATED_NODES);
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            edges: Vec::new(),
            declared_vertices: None,
        }
    }
    
    /// Record the vertex count announced by the input
    pub fn declared_vertices(mut self, count: usize) -> Self {
        self.declared_vertices = Some(count);
        self
    }
    
    /// Get or create a node index for the given vertex ID
    pub fn get_or_create_node(&mut self, id: i64) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }
        
        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id, idx);
        self.node_ids.push(id);
        
        idx
    }
    
    /// Add an undirected edge, registering unseen endpoints
    pub fn add_edge(&mut self, first: i64, second: i64, cost: u64) {
        let source = self.get_or_create_node(first);
        let target = self.get_or_create_node(second);
        self.edges.push(Edge::new(source, target, cost));
    }
    
    /// Number of vertices registered so far
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }
    
    /// Build the weighted graph
    pub fn build(self) -> WeightedGraph {
        if let Some(declared) = self.declared_vertices {
            if declared != self.node_ids.len() {
                log::warn!(
                    "Header declares {} vertices but edges reference {}",
                    declared,
                    self.node_ids.len()
                );
            }
        }
        
        WeightedGraph {
            node_ids: self.node_ids,
            edges: self.edges,
            declared_vertices: self.declared_vertices,
        }
    }
}
