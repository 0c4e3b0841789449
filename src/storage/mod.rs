//! Results persistence module

use anyhow::{Context, Result};
use crate::cluster::ClusteringOutcome;
use crate::graph::WeightedGraph;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use serde_json::{json, to_string_pretty};

/// Save analysis results to the specified directory
pub fn save_results(
    outcome: &ClusteringOutcome,
    graph: &WeightedGraph,
    output_dir: &Path,
) -> Result<()> {
    log::info!("Saving {} clusters to {}", outcome.clusters.len(), output_dir.display());
    
    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    
    save_summary(outcome, graph, output_dir)?;
    save_clusters(outcome, output_dir)?;
    
    log::info!("Results saved successfully");
    
    Ok(())
}

/// Save summary information
fn save_summary(
    outcome: &ClusteringOutcome,
    graph: &WeightedGraph,
    output_dir: &Path,
) -> Result<()> {
    let path = output_dir.join("summary.json");
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    
    let sizes = outcome.clusters.iter().map(|c| c.size);
    let summary = json!({
        "graph_stats": {
            "node_count": graph.node_count(),
            "declared_node_count": graph.declared_vertices,
            "edge_count": graph.edge_count(),
        },
        "clustering": {
            "target_clusters": outcome.target_clusters,
            "max_distance": outcome.max_distance,
            "spacing": outcome.spacing,
            "merges": outcome.merges,
            "edges_consumed": outcome.edges_consumed,
        },
        "cluster_stats": {
            "cluster_count": outcome.clusters.len(),
            "largest_cluster_size": sizes.clone().max().unwrap_or(0),
            "smallest_cluster_size": sizes.min().unwrap_or(0),
        }
    });
    
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;
    
    Ok(())
}

/// Save per-cluster detail
fn save_clusters(outcome: &ClusteringOutcome, output_dir: &Path) -> Result<()> {
    let path = output_dir.join("clusters.json");
    let mut file = File::create(&path)
        .with_context(|| format!("creating {}", path.display()))?;
    
    let clusters_json = json!({ "clusters": outcome.clusters });
    file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;
    
    Ok(())
}
