//! Disjoint-set forest over opaque node identities.
//!
//! Union-by-size keeps trees shallow: the root of the smaller set is attached
//! under the root of the larger one. [`DisjointSetForest::find`] halves paths
//! as it walks, re-pointing each visited node at its grandparent.
//!
//! Nodes are never registered explicitly. A node that has no parent entry is
//! its own root, and a root with no size entry is a singleton.

use std::collections::HashMap;

use crate::graph::NodeId;

/// Union-find keyed by node identity rather than by dense ordinal.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<N> {
    parent: HashMap<N, N>,
    sizes: HashMap<N, usize>,
}

impl<N: NodeId> Default for DisjointSetForest<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> DisjointSetForest<N> {
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            sizes: HashMap::new(),
        }
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Unseen nodes are their own representative. Mutates parent links.
    pub fn find(&mut self, node: &N) -> N {
        let mut current = node.clone();
        while let Some(parent) = self.parent.get(&current).cloned() {
            if parent == current {
                break;
            }
            let next = self.parent.get(&parent).cloned().unwrap_or(parent);
            self.parent.insert(current, next.clone());
            current = next;
        }
        current
    }

    /// Merges the sets containing `u` and `v`.
    ///
    /// On equal sizes the root of `u` is attached under the root of `v`.
    pub fn union(&mut self, u: &N, v: &N) {
        let mut small = self.find(u);
        let mut large = self.find(v);
        if small == large {
            return;
        }

        if self.size_of_root(&small) > self.size_of_root(&large) {
            std::mem::swap(&mut small, &mut large);
        }

        let merged = self.size_of_root(&small) + self.size_of_root(&large);
        self.sizes.remove(&small);
        self.sizes.insert(large.clone(), merged);
        self.parent.insert(small, large);
    }

    pub fn same_component(&mut self, u: &N, v: &N) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of nodes in the set containing `node` (1 for unseen nodes).
    pub fn component_size(&mut self, node: &N) -> usize {
        let root = self.find(node);
        self.size_of_root(&root)
    }

    /// Number of distinct nodes that have taken part in a union.
    pub fn len(&self) -> usize {
        self.parent.len() + self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty() && self.sizes.is_empty()
    }

    fn size_of_root(&self, root: &N) -> usize {
        self.sizes.get(root).copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> DisjointSetForest<&'static str> {
        DisjointSetForest::new()
    }

    #[test]
    fn test_unseen_node_is_own_root() {
        let mut uf = forest();
        assert_eq!(uf.find(&"Zoe"), "Zoe");
        assert_eq!(uf.component_size(&"Zoe"), 1);
        assert!(uf.is_empty());
    }

    #[test]
    fn test_union_joins_components() {
        let mut uf = forest();
        uf.union(&"Alice", &"Bob");
        assert!(uf.same_component(&"Alice", &"Bob"));
        assert!(!uf.same_component(&"Alice", &"Charlie"));
        assert_eq!(uf.component_size(&"Alice"), 2);
    }

    #[test]
    fn test_transitive_closure() {
        let mut uf = forest();
        uf.union(&"a", &"b");
        uf.union(&"b", &"c");
        uf.union(&"x", &"y");
        assert!(uf.same_component(&"a", &"c"));
        assert!(!uf.same_component(&"c", &"x"));
        assert_eq!(uf.component_size(&"c"), 3);
        assert_eq!(uf.component_size(&"y"), 2);
    }

    #[test]
    fn test_tie_attaches_first_root_under_second() {
        let mut uf = forest();
        uf.union(&"a", &"b");
        assert_eq!(uf.find(&"a"), "b");
        assert_eq!(uf.find(&"b"), "b");
    }

    #[test]
    fn test_smaller_set_goes_under_larger() {
        let mut uf = forest();
        uf.union(&"a", &"b");
        uf.union(&"b", &"c");
        // {a, b, c} rooted at b; a singleton joining from the right still loses
        uf.union(&"b", &"d");
        assert_eq!(uf.find(&"d"), "b");
        assert_eq!(uf.component_size(&"d"), 4);
    }

    #[test]
    fn test_stale_size_entry_removed() {
        let mut uf = forest();
        uf.union(&"a", &"b");
        uf.union(&"c", &"d");
        uf.union(&"a", &"c");
        let live_roots = uf.sizes.len();
        assert_eq!(live_roots, 1);
        assert_eq!(uf.sizes.values().sum::<usize>(), 4);
        assert_eq!(uf.len(), 4);
    }

    #[test]
    fn test_repeated_union_is_noop() {
        let mut uf = forest();
        uf.union(&"a", &"b");
        let root = uf.find(&"a");
        uf.union(&"b", &"a");
        uf.union(&"a", &"b");
        assert_eq!(uf.find(&"a"), root);
        assert_eq!(uf.component_size(&"a"), 2);
    }

    #[test]
    fn test_find_halves_long_chain() {
        let mut uf = forest();
        // Hand-built chain e -> d -> c -> b -> a
        uf.parent.insert("e", "d");
        uf.parent.insert("d", "c");
        uf.parent.insert("c", "b");
        uf.parent.insert("b", "a");
        uf.sizes.insert("a", 5);

        assert_eq!(uf.find(&"e"), "a");
        // e was re-pointed at its grandparent c, c at a
        assert_eq!(uf.parent.get("e"), Some(&"c"));
        assert_eq!(uf.parent.get("c"), Some(&"a"));
        assert_eq!(uf.find(&"e"), "a");
        assert_eq!(uf.parent.get("e"), Some(&"a"));
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut uf = forest();
        for (u, v) in [("a", "b"), ("c", "d"), ("b", "d"), ("e", "a")] {
            uf.union(&u, &v);
        }
        for node in ["a", "b", "c", "d", "e"] {
            let root = uf.find(&node);
            assert_eq!(uf.find(&root), root);
        }
    }
}
