use crate::graph::types::{Direction, NodeId, Weight};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
///
/// Ordering looks at cost only, so node identities need no `Ord`.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub cost: Weight,
    pub direction: Direction,
}

impl<N> HeapEntry<N> {
    pub fn new(node: N, cost: Weight, direction: Direction) -> Self {
        Self {
            node,
            cost,
            direction,
        }
    }
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

/// Walk predecessor links from `node` back to `origin`, returning the nodes
/// in origin-to-node order.
pub fn trace_path<N: NodeId>(origin: &N, node: &N, predecessors: &HashMap<N, N>) -> Vec<N> {
    let mut path = vec![node.clone()];
    let mut current = node;
    while current != origin {
        match predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
