//! Cluster analysis module

pub mod union_find;
pub mod spacing;
pub mod metrics;

pub use spacing::{max_spacing_clustering, ClusteringOutcome, ClusteringSession, StepOutcome};
pub use union_find::DisjointSets;

use serde::{Serialize, Deserialize};

/// One of the final clusters left when merging stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Position in the size-ordered cluster list
    pub id: u32,
    
    /// Input ID of the cluster's leader vertex
    pub leader: i64,
    
    /// Input IDs of every member, leader included
    pub members: Vec<i64>,
    
    /// Size of the cluster
    pub size: usize,
    
    /// Largest edge cost absorbed while forming this cluster
    pub max_distance: u64,
}
