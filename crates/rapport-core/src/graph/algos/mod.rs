//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bidirectional`: Two-frontier Dijkstra for point-to-point queries
//! - `dijkstra`: Single-source Dijkstra (reference distance, predicate search)
//! - `shared`: Common utilities used by both searches

pub mod bidirectional;
pub mod dijkstra;
pub mod shared;

pub use bidirectional::bidirectional_search;
pub use dijkstra::{reference_distance, search_until, search_until_within};
