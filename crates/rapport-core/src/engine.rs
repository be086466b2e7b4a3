//! Query façade over the forest and the adjacency store
//!
//! [`SocialGraph`] keeps the two structures in step on every insertion and
//! answers connectivity, shortest-path and predicate-guided queries. Path
//! queries are short-circuited by the forest: nodes in different components,
//! or nodes the adjacency store has never seen, are reported as disconnected
//! without running a search.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::{RapportError, Result};
use crate::forest::DisjointSetForest;
use crate::graph::{
    bidirectional_search, reference_distance, search_until_within, AdjacencyStore, NodeId,
    SearchMatch, Weight, WeightLimit, WeightedPath,
};

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PathOutcome<N> {
    /// A route exists with total weight below the limit
    Found(WeightedPath<N>),
    /// The endpoints are in different components, or one of them is unknown
    Disconnected,
    /// The endpoints are connected, but every route reaches the limit
    ExceedsLimit { limit: WeightLimit },
}

impl<N> PathOutcome<N> {
    pub fn path(&self) -> Option<&WeightedPath<N>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn distance(&self) -> Option<Weight> {
        self.path().map(|path| path.distance)
    }
}

/// Connectivity and weighted shortest-path engine
///
/// Queries take `&mut self` because connectivity checks compress the forest.
#[derive(Debug, Clone)]
pub struct SocialGraph<N> {
    forest: DisjointSetForest<N>,
    adjacency: AdjacencyStore<N>,
    default_limit: WeightLimit,
    verify: bool,
}

impl<N: NodeId> Default for SocialGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> SocialGraph<N> {
    /// Empty graph, unlimited default limit, oracle verification on
    pub fn new() -> Self {
        Self {
            forest: DisjointSetForest::new(),
            adjacency: AdjacencyStore::new(),
            default_limit: WeightLimit::UNLIMITED,
            verify: true,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            default_limit: config.limit(),
            verify: config.verify_with_oracle,
            ..Self::new()
        }
    }

    /// Insert or overwrite the undirected edge `a - b`
    pub fn add_edge(&mut self, a: N, b: N, weight: Weight) {
        self.forest.union(&a, &b);
        self.adjacency.add_edge(a, b, weight);
    }

    /// Whether `a` and `b` are connected. Unknown nodes are never connected,
    /// not even to themselves.
    pub fn same_component(&mut self, a: &N, b: &N) -> bool {
        if !self.adjacency.contains(a) || !self.adjacency.contains(b) {
            return false;
        }
        self.forest.same_component(a, b)
    }

    /// Shortest route under the default limit
    pub fn shortest_path(&mut self, from: &N, to: &N) -> Result<PathOutcome<N>> {
        let limit = self.default_limit;
        self.shortest_path_within(from, to, limit)
    }

    /// Shortest route with total weight strictly below `limit`.
    ///
    /// # Errors
    ///
    /// [`RapportError::InconsistentDistance`] when verification is enabled and
    /// the bidirectional search disagrees with single-source Dijkstra.
    pub fn shortest_path_within(
        &mut self,
        from: &N,
        to: &N,
        limit: WeightLimit,
    ) -> Result<PathOutcome<N>> {
        if !self.same_component(from, to) {
            tracing::debug!(from = ?from, to = ?to, "precheck_disconnected");
            return Ok(PathOutcome::Disconnected);
        }

        let found = bidirectional_search(&self.adjacency, from, to, limit);
        if self.verify {
            let reference = reference_distance(&self.adjacency, from, to, limit);
            check_agreement(from, to, limit, found.as_ref().map(|p| p.distance), reference)?;
        }

        Ok(match found {
            Some(path) => PathOutcome::Found(path),
            None => PathOutcome::ExceedsLimit { limit },
        })
    }

    /// Closest node from `start` accepted by `predicate`, with no limit
    pub fn search_until<P>(&self, start: &N, predicate: P) -> Option<SearchMatch<N>>
    where
        P: FnMut(&N) -> bool,
    {
        self.search_until_within(start, WeightLimit::UNLIMITED, predicate)
    }

    /// [`SocialGraph::search_until`] restricted to routes strictly below
    /// `limit`. An unknown start finds nothing, not even itself.
    pub fn search_until_within<P>(
        &self,
        start: &N,
        limit: WeightLimit,
        predicate: P,
    ) -> Option<SearchMatch<N>>
    where
        P: FnMut(&N) -> bool,
    {
        if !self.adjacency.contains(start) {
            tracing::debug!(start = ?start, "search_unknown_start");
            return None;
        }
        search_until_within(&self.adjacency, start, limit, predicate)
    }

    pub fn set_limit(&mut self, limit: WeightLimit) {
        self.default_limit = limit;
    }

    pub fn limit(&self) -> WeightLimit {
        self.default_limit
    }

    pub fn set_verification(&mut self, enabled: bool) {
        self.verify = enabled;
    }

    pub fn verification(&self) -> bool {
        self.verify
    }

    /// Number of connected components among known nodes
    pub fn component_count(&mut self) -> usize {
        let nodes: Vec<N> = self.adjacency.nodes().cloned().collect();
        let mut roots = std::collections::HashSet::new();
        for node in &nodes {
            roots.insert(self.forest.find(node));
        }
        roots.len()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn adjacency(&self) -> &AdjacencyStore<N> {
        &self.adjacency
    }
}

impl<N: NodeId + Ord> SocialGraph<N> {
    /// Every connected component as a sorted member list, ordered by each
    /// component's smallest member
    pub fn components(&mut self) -> Vec<Vec<N>> {
        let nodes: Vec<N> = self.adjacency.nodes().cloned().collect();
        let mut groups: HashMap<N, Vec<N>> = HashMap::new();
        for node in nodes {
            let root = self.forest.find(&node);
            groups.entry(root).or_default().push(node);
        }

        let mut components: Vec<Vec<N>> = groups
            .into_values()
            .map(|mut members| {
                members.sort();
                members
            })
            .collect();
        components.sort_by(|a, b| a.first().cmp(&b.first()));
        components
    }
}

/// Compare the bidirectional distance with the reference distance
fn check_agreement<N: NodeId>(
    from: &N,
    to: &N,
    limit: WeightLimit,
    fast: Option<Weight>,
    reference: Option<Weight>,
) -> Result<()> {
    if fast == reference {
        return Ok(());
    }

    let render = |distance: Option<Weight>| {
        distance.map_or_else(|| "no path".to_string(), |d| d.to_string())
    };
    tracing::error!(
        from = ?from,
        to = ?to,
        limit = %limit,
        fast = %render(fast),
        reference = %render(reference),
        "inconsistent_distance"
    );
    Err(RapportError::InconsistentDistance {
        from: format!("{:?}", from),
        to: format!("{:?}", to),
        limit: limit.to_string(),
        fast: render(fast),
        reference: render(reference),
    })
}
