//! Rapport Core Library
//!
//! Connectivity and weighted shortest-path engine for undirected social graphs:
//! a union-by-size disjoint-set forest, a symmetric weighted adjacency store,
//! a bidirectional Dijkstra search with limit pruning, and a single-source
//! Dijkstra used both as a verification oracle and as a predicate-guided search.

pub mod config;
pub mod engine;
pub mod error;
pub mod forest;
pub mod graph;
pub mod logging;

pub use engine::{PathOutcome, SocialGraph};
pub use graph::{NodeId, SearchMatch, Weight, WeightLimit, WeightedPath};
