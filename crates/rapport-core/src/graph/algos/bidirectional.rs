//! Bidirectional Dijkstra for point-to-point queries
//!
//! A forward frontier grows from the source and a backward frontier from the
//! target. Both feed one min-heap, so the globally cheapest tentative entry is
//! always expanded next. Whenever a relaxation gives a node a distance in both
//! directions, the combined route is a candidate; the best candidate under the
//! limit is kept, with its path materialised at that moment. Expansion stops
//! as soon as a popped node has already been settled by the opposite frontier.

use crate::graph::algos::shared::{trace_path, HeapEntry};
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Direction, NodeId, Weight, WeightLimit, WeightedPath};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// One side of the search
struct Frontier<N> {
    origin: N,
    distances: HashMap<N, Weight>,
    predecessors: HashMap<N, N>,
    settled: HashSet<N>,
}

impl<N: NodeId> Frontier<N> {
    fn new(origin: &N) -> Self {
        let mut distances = HashMap::new();
        distances.insert(origin.clone(), Weight::ZERO);
        Self {
            origin: origin.clone(),
            distances,
            predecessors: HashMap::new(),
            settled: HashSet::new(),
        }
    }

    fn distance(&self, node: &N) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    /// Nodes from this frontier's origin to `node`
    fn path_to(&self, node: &N) -> Vec<N> {
        trace_path(&self.origin, node, &self.predecessors)
    }
}

/// State tracked during a bidirectional search
struct BidirectionalState<N> {
    frontiers: [Frontier<N>; 2],
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    best: Option<WeightedPath<N>>,
    limit: WeightLimit,
}

impl<N: NodeId> BidirectionalState<N> {
    fn new(source: &N, target: &N, limit: WeightLimit) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry::new(
            source.clone(),
            Weight::ZERO,
            Direction::Forward,
        )));
        heap.push(Reverse(HeapEntry::new(
            target.clone(),
            Weight::ZERO,
            Direction::Backward,
        )));
        Self {
            frontiers: [Frontier::new(source), Frontier::new(target)],
            heap,
            best: None,
            limit,
        }
    }

    fn frontier(&self, direction: Direction) -> &Frontier<N> {
        &self.frontiers[direction.index()]
    }

    fn frontier_mut(&mut self, direction: Direction) -> &mut Frontier<N> {
        &mut self.frontiers[direction.index()]
    }

    fn is_stale(&self, entry: &HeapEntry<N>) -> bool {
        self.frontier(entry.direction)
            .distance(&entry.node)
            .is_some_and(|best| entry.cost > best)
    }

    /// Relax every edge out of `node` for one frontier
    fn relax<G>(&mut self, provider: &G, node: &N, cost: Weight, direction: Direction)
    where
        G: GraphProvider<N> + ?Sized,
    {
        for (neighbor, weight) in provider.neighbors(node) {
            let candidate = cost + weight;
            if !self.limit.admits(candidate) {
                continue;
            }
            let improves = self
                .frontier(direction)
                .distance(neighbor)
                .is_none_or(|known| candidate < known);
            if !improves {
                continue;
            }

            let frontier = self.frontier_mut(direction);
            frontier.distances.insert(neighbor.clone(), candidate);
            frontier.predecessors.insert(neighbor.clone(), node.clone());
            self.heap
                .push(Reverse(HeapEntry::new(neighbor.clone(), candidate, direction)));

            self.consider_meeting(neighbor);
        }
    }

    /// Record `node` as the meeting point if it yields a better route
    fn consider_meeting(&mut self, node: &N) {
        let forward = self.frontier(Direction::Forward);
        let backward = self.frontier(Direction::Backward);
        let (Some(df), Some(db)) = (forward.distance(node), backward.distance(node)) else {
            return;
        };

        let total = df + db;
        if !self.limit.admits(total) {
            return;
        }
        if self.best.as_ref().is_some_and(|best| best.distance <= total) {
            return;
        }

        let mut nodes = forward.path_to(node);
        let mut tail = backward.path_to(node);
        tail.pop();
        tail.reverse();
        nodes.extend(tail);

        tracing::trace!(meeting = ?node, total = %total, "meeting_point");
        self.best = Some(WeightedPath {
            distance: total,
            nodes,
        });
    }
}

/// Shortest route from `source` to `target` with total strictly below `limit`.
///
/// Returns `None` when no such route exists; the caller decides whether that
/// means disconnection or an exceeded limit. A node's route to itself is the
/// trivial zero-weight path regardless of the limit.
#[tracing::instrument(skip(provider), fields(source = ?source, target = ?target, limit = %limit))]
pub fn bidirectional_search<N, G>(
    provider: &G,
    source: &N,
    target: &N,
    limit: WeightLimit,
) -> Option<WeightedPath<N>>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    if source == target {
        return Some(WeightedPath::trivial(source.clone()));
    }

    let mut state = BidirectionalState::new(source, target, limit);

    while let Some(Reverse(entry)) = state.heap.pop() {
        if state.is_stale(&entry) {
            continue;
        }
        let direction = entry.direction;
        if state
            .frontier(direction.opposite())
            .settled
            .contains(&entry.node)
        {
            break;
        }
        state
            .frontier_mut(direction)
            .settled
            .insert(entry.node.clone());
        state.relax(provider, &entry.node, entry.cost, direction);
    }

    tracing::debug!(
        settled_forward = state.frontier(Direction::Forward).settled.len(),
        settled_backward = state.frontier(Direction::Backward).settled.len(),
        found = state.best.is_some(),
        "bidirectional_done"
    );
    state.best
}
