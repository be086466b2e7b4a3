//! Shared friendship network used across the search tests

use crate::graph::adjacency::AdjacencyStore;
use crate::graph::types::Weight;

/// Six disjoint groups: a diamond, a second diamond, a denser group of four,
/// a single pair, a four-cycle, and a group with two tied shortest routes.
pub const FRIENDSHIP_EDGES: &[(&str, &str, u64)] = &[
    ("Alice", "Bob", 5),
    ("Bob", "Charlie", 3),
    ("Alice", "David", 10),
    ("David", "Charlie", 2),
    ("Emily", "Frank", 4),
    ("Frank", "Grace", 6),
    ("Emily", "Henry", 15),
    ("Henry", "Grace", 3),
    ("Ivan", "Julia", 2),
    ("Julia", "Kevin", 3),
    ("Ivan", "Laura", 12),
    ("Laura", "Kevin", 4),
    ("Julia", "Laura", 7),
    ("Mike", "Nancy", 5),
    ("Oliver", "Peter", 3),
    ("Peter", "Quinn", 2),
    ("Quinn", "Rachel", 4),
    ("Rachel", "Oliver", 8),
    ("Sam", "Tom", 1),
    ("Tom", "Victor", 2),
    ("Sam", "Uma", 2),
    ("Uma", "Victor", 1),
    ("Sam", "Victor", 10),
];

pub fn friendship_store() -> AdjacencyStore<&'static str> {
    let mut store = AdjacencyStore::new();
    for &(a, b, w) in FRIENDSHIP_EDGES {
        store.add_edge(a, b, Weight::new(w));
    }
    store
}
