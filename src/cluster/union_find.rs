//! Union-find over graph vertices with per-cluster distance tracking
//!
//! Leadership is kept flat: when two clusters merge, every follower of the
//! absorbed leader is re-pointed at the surviving one, so `find` is a single
//! lookup. Union by size bounds how many followers move on each merge.

use std::collections::BTreeSet;

/// Disjoint-set forest tracking cluster leaders, members and max distance
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Leader of each vertex (a vertex is a leader iff `leader[v] == v`)
    leader: Vec<u32>,
    
    /// Members of each leader's cluster, the leader itself included; empty
    /// for vertices that no longer lead
    followers: Vec<Vec<u32>>,
    
    /// Largest edge cost absorbed into each vertex's cluster
    max_distance: Vec<u64>,
    
    /// Live cluster registry, one entry per leader
    leaders: BTreeSet<u32>,
}

impl DisjointSets {
    /// Create `size` singleton clusters
    pub fn new(size: usize) -> Self {
        let mut leader = Vec::with_capacity(size);
        let mut followers = Vec::with_capacity(size);
        
        // Each vertex leads and follows itself
        for i in 0..size {
            let v = i as u32;
            leader.push(v);
            followers.push(vec![v]);
        }
        
        Self {
            leaders: leader.iter().copied().collect(),
            leader,
            followers,
            max_distance: vec![0; size],
        }
    }
    
    /// Leader of the cluster containing `v`
    pub fn find(&self, v: u32) -> u32 {
        self.leader[v as usize]
    }
    
    /// Whether `v` currently leads its cluster
    pub fn is_leader(&self, v: u32) -> bool {
        self.find(v) == v
    }
    
    /// Number of live clusters
    pub fn cluster_count(&self) -> usize {
        self.leaders.len()
    }
    
    /// Live leaders in ascending index order
    pub fn leaders(&self) -> impl Iterator<Item = u32> + '_ {
        self.leaders.iter().copied()
    }
    
    /// Members of the cluster containing `v`
    pub fn followers(&self, v: u32) -> &[u32] {
        &self.followers[self.find(v) as usize]
    }
    
    /// Size of the cluster containing `v`
    pub fn cluster_size(&self, v: u32) -> usize {
        self.followers(v).len()
    }
    
    /// Largest edge cost absorbed into the cluster containing `v`
    pub fn max_distance(&self, v: u32) -> u64 {
        self.max_distance[self.find(v) as usize]
    }
    
    /// Make sure the cluster containing `v` records at least `cost`
    pub fn raise_max_distance(&mut self, v: u32, cost: u64) {
        let leader = self.find(v) as usize;
        if cost > self.max_distance[leader] {
            self.max_distance[leader] = cost;
        }
    }
    
    /// Merge the clusters containing `x` and `y`, returning the surviving leader
    ///
    /// The cluster with more followers absorbs the other; on a tie the
    /// cluster of `y` survives.
    pub fn union(&mut self, x: u32, y: u32) -> u32 {
        let root_x = self.find(x);
        let root_y = self.find(y);
        
        if root_x == root_y {
            return root_x;
        }
        
        let size_x = self.followers[root_x as usize].len();
        let size_y = self.followers[root_y as usize].len();
        
        if size_x > size_y {
            self.absorb(root_x, root_y);
            root_x
        } else {
            self.absorb(root_y, root_x);
            root_y
        }
    }
    
    fn absorb(&mut self, winner: u32, absorbed: u32) {
        let (w, a) = (winner as usize, absorbed as usize);
        let merged_max = self.max_distance[w].max(self.max_distance[a]);
        self.max_distance[w] = merged_max;
        
        let moved = std::mem::take(&mut self.followers[a]);
        for &f in &moved {
            self.leader[f as usize] = winner;
            self.max_distance[f as usize] = merged_max;
        }
        self.followers[w].extend(moved);
        
        self.leaders.remove(&absorbed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct_leaders(sets: &DisjointSets, n: usize) -> HashSet<u32> {
        (0..n as u32).map(|v| sets.find(v)).collect()
    }

    #[test]
    fn starts_as_singletons() {
        let sets = DisjointSets::new(4);
        assert_eq!(sets.cluster_count(), 4);
        for v in 0..4 {
            assert!(sets.is_leader(v));
            assert_eq!(sets.followers(v), &[v]);
            assert_eq!(sets.max_distance(v), 0);
        }
    }

    #[test]
    fn larger_cluster_absorbs_smaller() {
        let mut sets = DisjointSets::new(5);
        let big = sets.union(0, 1);
        let big = sets.union(big, 2);
        let merged = sets.union(3, big);
        assert_eq!(merged, big);
        assert_eq!(sets.find(3), big);
        assert_eq!(sets.cluster_size(3), 4);
        assert_eq!(sets.cluster_count(), 2);
    }

    #[test]
    fn tie_keeps_second_cluster() {
        let mut sets = DisjointSets::new(2);
        assert_eq!(sets.union(0, 1), 1);
        assert!(!sets.is_leader(0));
        assert!(sets.followers(0).contains(&0));
    }

    #[test]
    fn union_within_cluster_is_noop() {
        let mut sets = DisjointSets::new(3);
        let leader = sets.union(0, 1);
        assert_eq!(sets.union(1, 0), leader);
        assert_eq!(sets.cluster_count(), 2);
        assert_eq!(sets.cluster_size(leader), 2);
    }

    #[test]
    fn max_distance_propagates_through_union() {
        let mut sets = DisjointSets::new(4);
        sets.raise_max_distance(0, 7);
        sets.raise_max_distance(2, 3);
        sets.raise_max_distance(2, 1);
        assert_eq!(sets.max_distance(2), 3);

        sets.union(0, 1);
        let leader = sets.union(2, 1);
        assert_eq!(sets.max_distance(leader), 7);
        for v in [0, 1, 2] {
            assert_eq!(sets.max_distance(v), 7);
        }
        assert_eq!(sets.max_distance(3), 0);
    }

    #[test]
    fn registry_tracks_distinct_leaders() {
        let n = 8;
        let mut sets = DisjointSets::new(n);
        for (x, y) in [(0, 1), (2, 3), (1, 3), (4, 5), (6, 7), (5, 7), (0, 6)] {
            sets.union(x, y);
            let reachable = distinct_leaders(&sets, n);
            assert_eq!(reachable.len(), sets.cluster_count());
            assert!(reachable.iter().all(|&l| sets.is_leader(l)));
            let members: usize = sets.leaders().map(|l| sets.cluster_size(l)).sum();
            assert_eq!(members, n);
        }
        assert_eq!(sets.cluster_count(), 1);
    }
}
