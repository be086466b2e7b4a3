use crate::graph::adjacency::AdjacencyStore;
use crate::graph::types::{NodeId, Weight};

/// Trait for providing weighted adjacency to the search algorithms
pub trait GraphProvider<N> {
    fn neighbors<'a>(&'a self, node: &N) -> Vec<(&'a N, Weight)>;
    fn contains(&self, node: &N) -> bool;
}

impl<N: NodeId> GraphProvider<N> for AdjacencyStore<N> {
    fn neighbors<'a>(&'a self, node: &N) -> Vec<(&'a N, Weight)> {
        AdjacencyStore::neighbors(self, node).collect()
    }

    fn contains(&self, node: &N) -> bool {
        AdjacencyStore::contains(self, node)
    }
}
