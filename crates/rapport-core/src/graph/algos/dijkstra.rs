//! Single-source Dijkstra
//!
//! Two entry points share one settling loop:
//! - [`reference_distance`]: exact point-to-point distance, used as ground
//!   truth for the bidirectional search.
//! - [`search_until`]: predicate-guided search that returns the closest
//!   node the caller accepts.

use crate::graph::algos::shared::{trace_path, HeapEntry};
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Direction, NodeId, SearchMatch, Weight, WeightLimit, WeightedPath};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// State tracked during a single-source traversal
struct DijkstraState<N> {
    distances: HashMap<N, Weight>,
    predecessors: HashMap<N, N>,
    settled: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
}

impl<N: NodeId> DijkstraState<N> {
    fn new(source: &N) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source.clone(), Weight::ZERO);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry::new(
            source.clone(),
            Weight::ZERO,
            Direction::Forward,
        )));
        Self {
            distances,
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            heap,
        }
    }

    /// Pop the next node to settle, skipping stale heap entries
    fn next_settled(&mut self) -> Option<(N, Weight)> {
        while let Some(Reverse(HeapEntry { node, cost, .. })) = self.heap.pop() {
            let best = self.distances.get(&node).copied();
            if best.is_some_and(|best| cost > best) || self.settled.contains(&node) {
                continue;
            }
            self.settled.insert(node.clone());
            return Some((node, cost));
        }
        None
    }

    /// Relax every edge out of `node`, pruning totals the limit rejects
    fn relax<G>(&mut self, provider: &G, node: &N, cost: Weight, limit: WeightLimit)
    where
        G: GraphProvider<N> + ?Sized,
    {
        for (neighbor, weight) in provider.neighbors(node) {
            let candidate = cost + weight;
            if !limit.admits(candidate) {
                continue;
            }
            let improves = self
                .distances
                .get(neighbor)
                .is_none_or(|&known| candidate < known);
            if improves {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors.insert(neighbor.clone(), node.clone());
                self.heap.push(Reverse(HeapEntry::new(
                    neighbor.clone(),
                    candidate,
                    Direction::Forward,
                )));
            }
        }
    }
}

/// Exact distance from `source` to `target`, or `None` if every route is at
/// or above `limit` or no route exists.
#[tracing::instrument(skip(provider), fields(source = ?source, target = ?target, limit = %limit))]
pub fn reference_distance<N, G>(
    provider: &G,
    source: &N,
    target: &N,
    limit: WeightLimit,
) -> Option<Weight>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    if source == target {
        return Some(Weight::ZERO);
    }

    let mut state = DijkstraState::new(source);
    while let Some((node, cost)) = state.next_settled() {
        if node == *target {
            return Some(cost);
        }
        if !limit.admits(cost) {
            break;
        }
        state.relax(provider, &node, cost, limit);
    }

    tracing::debug!(settled = state.settled.len(), "reference_unreached");
    None
}

/// Settle nodes outward from `source` until `predicate` accepts one.
///
/// Nodes are offered to the predicate in non-decreasing distance order, the
/// source first, so the first acceptance is the closest acceptable node.
pub fn search_until<N, G, P>(
    provider: &G,
    source: &N,
    predicate: P,
) -> Option<SearchMatch<N>>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
    P: FnMut(&N) -> bool,
{
    search_until_within(provider, source, WeightLimit::UNLIMITED, predicate)
}

/// [`search_until`] restricted to routes strictly below `limit`.
#[tracing::instrument(skip(provider, predicate), fields(source = ?source, limit = %limit))]
pub fn search_until_within<N, G, P>(
    provider: &G,
    source: &N,
    limit: WeightLimit,
    mut predicate: P,
) -> Option<SearchMatch<N>>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
    P: FnMut(&N) -> bool,
{
    let mut state = DijkstraState::new(source);
    while let Some((node, cost)) = state.next_settled() {
        if predicate(&node) {
            tracing::debug!(
                matched = ?node,
                distance = %cost,
                settled = state.settled.len(),
                "search_match"
            );
            let nodes = trace_path(source, &node, &state.predecessors);
            return Some(SearchMatch {
                node,
                path: WeightedPath {
                    distance: cost,
                    nodes,
                },
            });
        }
        state.relax(provider, &node, cost, limit);
    }

    tracing::debug!(settled = state.settled.len(), "search_exhausted");
    None
}
