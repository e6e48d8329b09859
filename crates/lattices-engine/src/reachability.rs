//! Derived order as a dense matrix over element indices

use petgraph::graph::DiGraph;
use petgraph::visit::Bfs;

/// Reflexive-transitive closure of the covering graph.
///
/// `le[a * len + b]` is true iff `a ≤ b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DerivedOrder {
    le: Vec<bool>,
    len: usize,
}

impl DerivedOrder {
    /// Close a covering graph whose edges point from greater to lesser.
    ///
    /// A breadth-first walk from each node reaches exactly the elements below
    /// it (itself included).
    pub(crate) fn from_covering(covering: &DiGraph<usize, ()>) -> Self {
        let len = covering.node_count();
        let mut le = vec![false; len * len];
        for start in covering.node_indices() {
            let mut bfs = Bfs::new(covering, start);
            while let Some(lower) = bfs.next(covering) {
                le[lower.index() * len + start.index()] = true;
            }
        }
        Self { le, len }
    }

    pub(crate) fn le(&self, a: usize, b: usize) -> bool {
        self.le[a * self.len + b]
    }

    pub(crate) fn lt(&self, a: usize, b: usize) -> bool {
        a != b && self.le(a, b)
    }

    /// The dual order: `a ≤' b` iff `b ≤ a`
    pub(crate) fn transposed(&self) -> Self {
        let len = self.len;
        let mut le = vec![false; len * len];
        for a in 0..len {
            for b in 0..len {
                le[b * len + a] = self.le[a * len + b];
            }
        }
        Self { le, len }
    }
}
