//! Symmetric weighted adjacency map
//!
//! Every insertion writes both directions. Re-inserting an unordered pair
//! replaces its weight outright (last write wins); weights are never merged
//! or accumulated.

use std::collections::HashMap;

use crate::graph::types::{NodeId, Weight};

#[derive(Debug, Clone)]
pub struct AdjacencyStore<N> {
    adjacency: HashMap<N, HashMap<N, Weight>>,
}

impl<N: NodeId> Default for AdjacencyStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> AdjacencyStore<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Insert or overwrite the undirected edge `a - b`
    pub fn add_edge(&mut self, a: N, b: N, weight: Weight) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// True iff `node` has at least one neighbor
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency
            .get(node)
            .is_some_and(|neighbors| !neighbors.is_empty())
    }

    /// Neighbors of `node` with edge weights; empty for unseen nodes
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, Weight)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    pub fn weight(&self, a: &N, b: &N) -> Option<Weight> {
        self.adjacency.get(a).and_then(|neighbors| neighbors.get(b)).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| !neighbors.is_empty())
            .map(|(node, _)| node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of undirected edges; a self-loop counts once
    pub fn edge_count(&self) -> usize {
        let mut entries = 0;
        let mut loops = 0;
        for (node, neighbors) in &self.adjacency {
            entries += neighbors.len();
            if neighbors.contains_key(node) {
                loops += 1;
            }
        }
        (entries - loops) / 2 + loops
    }
}
