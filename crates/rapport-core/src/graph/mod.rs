//! Weighted graph storage and path-finding operations
//!
//! Provides the pieces the query façade composes:
//! - Symmetric weighted adjacency store
//! - Bidirectional Dijkstra for point-to-point shortest paths
//! - Single-source Dijkstra as reference oracle and predicate-guided search
//! - Graph provider trait for pluggable adjacency sources

pub mod adjacency;
pub mod algos;
pub mod provider;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use adjacency::AdjacencyStore;
pub use algos::{bidirectional_search, reference_distance, search_until, search_until_within};
pub use provider::GraphProvider;
pub use types::{Direction, NodeId, SearchMatch, Weight, WeightLimit, WeightedPath};
