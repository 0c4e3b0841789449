//! Max-spacing k-clustering driver
//!
//! Edges are consumed cheapest first. Both endpoint clusters record the
//! popped cost before the endpoints are compared, then distinct clusters are
//! merged. Merging stops as soon as exactly `k` clusters remain.

use serde::{Serialize, Deserialize};
use crate::cluster::{metrics, Cluster, DisjointSets};
use crate::error::ClusterError;
use crate::graph::{Edge, EdgeHeap, WeightedGraph};

/// What a single driver step did with the popped edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The edge joined two clusters; `leader` survived the merge
    Merged { edge: Edge, leader: u32 },
    /// Both endpoints already shared `leader`
    Discarded { edge: Edge, leader: u32 },
}

/// Result of a completed clustering run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringOutcome {
    /// Number of clusters the run stopped at
    pub target_clusters: usize,
    
    /// Largest max distance across the surviving clusters
    pub max_distance: u64,
    
    /// Cheapest remaining edge between two different clusters
    pub spacing: Option<u64>,
    
    /// Unions performed
    pub merges: usize,
    
    /// Edges popped, merged or discarded
    pub edges_consumed: usize,
    
    /// Final clusters, largest first
    pub clusters: Vec<Cluster>,
}

/// Clustering state for one run over one graph
pub struct ClusteringSession<'g> {
    graph: &'g WeightedGraph,
    sets: DisjointSets,
    heap: EdgeHeap,
    merges: usize,
    edges_consumed: usize,
}

impl<'g> ClusteringSession<'g> {
    /// Start from singleton clusters and a full edge queue
    pub fn new(graph: &'g WeightedGraph) -> Self {
        Self {
            graph,
            sets: DisjointSets::new(graph.node_count()),
            heap: EdgeHeap::from_edges(graph.edges.iter().copied()),
            merges: 0,
            edges_consumed: 0,
        }
    }
    
    /// Current cluster membership
    pub fn sets(&self) -> &DisjointSets {
        &self.sets
    }
    
    /// Number of live clusters
    pub fn cluster_count(&self) -> usize {
        self.sets.cluster_count()
    }
    
    /// Edges not yet popped
    pub fn remaining_edges(&self) -> usize {
        self.heap.len()
    }
    
    /// Unions performed so far
    pub fn merges(&self) -> usize {
        self.merges
    }
    
    /// Whether merging should stop for target `k`
    pub fn is_done(&self, k: usize) -> bool {
        self.cluster_count() <= k
    }
    
    /// Pop the cheapest edge and apply it; `None` once the queue is empty
    pub fn step(&mut self) -> Option<StepOutcome> {
        let edge = self.heap.pop_min()?;
        self.edges_consumed += 1;
        
        self.sets.raise_max_distance(edge.source, edge.cost);
        self.sets.raise_max_distance(edge.target, edge.cost);
        
        let x = self.sets.find(edge.source);
        let y = self.sets.find(edge.target);
        
        if x == y {
            log::debug!("Discarding edge {:?}: endpoints already share leader {}", edge, x);
            return Some(StepOutcome::Discarded { edge, leader: x });
        }
        
        let leader = self.sets.union(x, y);
        self.merges += 1;
        log::debug!(
            "Merged via cost {}: leader {} now has {} members, {} clusters left",
            edge.cost,
            leader,
            self.sets.cluster_size(leader),
            self.sets.cluster_count()
        );
        
        Some(StepOutcome::Merged { edge, leader })
    }
    
    /// Merge until exactly `k` clusters remain and report the result
    pub fn run(mut self, k: usize) -> Result<ClusteringOutcome, ClusterError> {
        if k == 0 {
            return Err(ClusterError::InvalidTarget { target: k });
        }
        
        log::info!(
            "Clustering {} vertices into {} clusters using {} edges",
            self.graph.node_count(),
            k,
            self.heap.len()
        );
        
        while !self.is_done(k) {
            if self.step().is_none() {
                return Err(ClusterError::Exhausted {
                    clusters: self.cluster_count(),
                    target: k,
                });
            }
        }
        
        let max_distance = self.sets
            .leaders()
            .map(|leader| self.sets.max_distance(leader))
            .max()
            .unwrap_or(0);
        
        let clusters = metrics::cluster_summaries(&self.sets, self.graph);
        let spacing = metrics::spacing(&self.sets, self.heap.drain_remaining());
        
        log::info!(
            "Stopped at {} clusters after {} merges; max distance {}, spacing {:?}",
            clusters.len(),
            self.merges,
            max_distance,
            spacing
        );
        
        Ok(ClusteringOutcome {
            target_clusters: k,
            max_distance,
            spacing,
            merges: self.merges,
            edges_consumed: self.edges_consumed,
            clusters,
        })
    }
}

/// Run a fresh clustering session over `graph`
pub fn max_spacing_clustering(
    graph: &WeightedGraph,
    k: usize,
) -> Result<ClusteringOutcome, ClusterError> {
    ClusteringSession::new(graph).run(k)
}
