//! Cluster statistics and metrics

use crate::cluster::{Cluster, DisjointSets};
use crate::graph::{Edge, WeightedGraph};

/// Cheapest edge whose endpoints lie in different clusters
///
/// Fed with the edges the driver never popped, this is the spacing of the
/// final clustering. Edges inside a cluster are ignored.
pub fn spacing(sets: &DisjointSets, edges: impl IntoIterator<Item = Edge>) -> Option<u64> {
    edges
        .into_iter()
        .filter(|edge| sets.find(edge.source) != sets.find(edge.target))
        .map(|edge| edge.cost)
        .min()
}

/// Describe every live cluster, largest first
pub fn cluster_summaries(sets: &DisjointSets, graph: &WeightedGraph) -> Vec<Cluster> {
    let resolve = |v: u32| graph.node_id(v).unwrap_or(i64::from(v));
    
    let mut clusters: Vec<Cluster> = sets
        .leaders()
        .map(|leader| {
            let mut members: Vec<i64> = sets
                .followers(leader)
                .iter()
                .map(|&v| resolve(v))
                .collect();
            members.sort_unstable();
            Cluster {
                id: 0,
                leader: resolve(leader),
                size: members.len(),
                members,
                max_distance: sets.max_distance(leader),
            }
        })
        .collect();
    
    // Sort clusters by size (largest first)
    clusters.sort_by(|a, b| b.size.cmp(&a.size).then(a.leader.cmp(&b.leader)));
    for (id, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = id as u32;
    }
    
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_ids(ids: Vec<i64>) -> WeightedGraph {
        WeightedGraph { node_ids: ids, edges: Vec::new(), declared_vertices: None }
    }

    #[test]
    fn spacing_skips_internal_edges() {
        let mut sets = DisjointSets::new(3);
        sets.union(0, 1);
        let edges = vec![Edge::new(0, 1, 1), Edge::new(1, 2, 8), Edge::new(0, 2, 6)];
        assert_eq!(spacing(&sets, edges), Some(6));
    }

    #[test]
    fn spacing_is_none_for_single_cluster() {
        let mut sets = DisjointSets::new(2);
        sets.union(0, 1);
        assert_eq!(spacing(&sets, vec![Edge::new(1, 0, 3)]), None);
    }

    #[test]
    fn summaries_use_input_ids_and_size_order() {
        let graph = graph_with_ids(vec![100, 200, 300, 400]);
        let mut sets = DisjointSets::new(4);
        sets.raise_max_distance(2, 9);
        sets.union(2, 3);
        sets.union(1, 3);

        let clusters = cluster_summaries(&sets, &graph);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].id, 0);
        assert_eq!(clusters[0].members, vec![200, 300, 400]);
        assert_eq!(clusters[0].max_distance, 9);
        assert_eq!(clusters[1].members, vec![100]);
        assert_eq!(clusters[1].leader, 100);
        assert_eq!(clusters[1].max_distance, 0);
    }
}
