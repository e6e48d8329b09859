//! The lattice engine
//!
//! A [`Lattice`] is built once from a finite element collection and an order
//! relation, and is immutable afterwards. Elements live in an index arena
//! (`IndexSet`); the covering graph, the derived order and the topological
//! order are all expressed over those indices, so queries never hash
//! elements beyond the initial lookup.

use crate::hasse::covering_graph;
use crate::reachability::DerivedOrder;
use indexmap::IndexSet;
use lattices_core::{
    stringify, Element, Label, LatticeConfig, LatticeError, LatticeResult, Order, Reversed,
    SharedOrder,
};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A finite lattice over elements of type `T`
pub struct Lattice<T: Element> {
    /// Element arena; index `i` is node `i` of the covering graph
    pub(crate) elements: Arc<IndexSet<T>>,
    /// The relation the lattice was built from (dualised by `inverse`)
    pub(crate) relation: SharedOrder<T>,
    /// Cover edges, greater → lesser
    pub(crate) covering: DiGraph<usize, ()>,
    pub(crate) order: DerivedOrder,
    /// Element indices, greatest first
    pub(crate) topological: Vec<usize>,
    pub(crate) config: LatticeConfig,
}

impl<T: Element> Lattice<T> {
    /// Build a lattice with the default configuration.
    ///
    /// Duplicate elements are collapsed. Fails if `elements` is empty, if the
    /// relation holds in both directions for two distinct elements, or if it
    /// is cyclic.
    pub fn new<I, O>(elements: I, relation: O) -> LatticeResult<Self>
    where
        I: IntoIterator<Item = T>,
        O: Order<T> + Send + Sync + 'static,
    {
        Self::with_config(elements, relation, LatticeConfig::default())
    }

    /// Build a lattice with an explicit configuration
    pub fn with_config<I, O>(elements: I, relation: O, config: LatticeConfig) -> LatticeResult<Self>
    where
        I: IntoIterator<Item = T>,
        O: Order<T> + Send + Sync + 'static,
    {
        config.validate()?;

        let elements: IndexSet<T> = elements.into_iter().collect();
        if elements.is_empty() {
            return Err(LatticeError::construction(
                "cannot build a lattice from an empty element collection",
            ));
        }

        let relation: SharedOrder<T> = Arc::new(relation);
        let covering = covering_graph(&elements, relation.as_ref(), config.strict_antisymmetry)?;

        let topological = toposort(&covering, None)
            .map_err(|cycle| {
                LatticeError::construction(format!(
                    "covering graph has a cycle through {:?}",
                    elements.get_index(cycle.node_id().index())
                ))
            })?
            .into_iter()
            .map(NodeIndex::index)
            .collect();

        let order = DerivedOrder::from_covering(&covering);
        let lattice = Self {
            elements: Arc::new(elements),
            relation,
            covering,
            order,
            topological,
            config,
        };

        debug!(
            elements = lattice.len(),
            cover_edges = lattice.covering.edge_count(),
            top = ?lattice.top(),
            bottom = ?lattice.bottom(),
            "Constructed lattice"
        );

        Ok(lattice)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: construction rejects empty collections
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in the order they were supplied (duplicates removed)
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.iter()
    }

    /// Elements consistent with the order, greatest first
    pub fn topological_order(&self) -> Vec<&T> {
        self.collect(|_| true)
    }

    /// The first element of the topological order
    pub fn top(&self) -> &T {
        &self.elements[self.topological[0]]
    }

    /// The last element of the topological order
    pub fn bottom(&self) -> &T {
        &self.elements[self.topological[self.topological.len() - 1]]
    }

    /// Whether `node` is one of the elements
    pub fn contains(&self, node: &T) -> bool {
        self.elements.contains(node)
    }

    /// The configuration the lattice was built with
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Cover relations as `(greater, lesser)` pairs, in topological order of
    /// the greater element
    pub fn cover_edges(&self) -> Vec<(&T, &T)> {
        let mut edges = Vec::with_capacity(self.covering.edge_count());
        for &greater in &self.topological {
            for lesser in self.lower_cover_indices(greater) {
                edges.push((&self.elements[greater], &self.elements[lesser]));
            }
        }
        edges
    }

    /// `a ≤ b` in the derived order
    pub fn le(&self, a: &T, b: &T) -> LatticeResult<bool> {
        Ok(self.order.le(self.index_of(a)?, self.index_of(b)?))
    }

    /// Evaluate the relation the lattice was built from (dualised for an
    /// inverse lattice)
    pub fn relates(&self, a: &T, b: &T) -> bool {
        self.relation.le(a, b)
    }

    /// Elements strictly greater than `node`, plus `node` itself if `include`
    pub fn ascendants(&self, node: &T, include: bool) -> LatticeResult<Vec<&T>> {
        let idx = self.index_of(node)?;
        Ok(self.collect(|other| self.order.lt(idx, other) || (include && other == idx)))
    }

    /// Elements strictly less than `node`, plus `node` itself if `include`
    pub fn descendants(&self, node: &T, include: bool) -> LatticeResult<Vec<&T>> {
        let idx = self.index_of(node)?;
        Ok(self.collect(|other| self.order.lt(other, idx) || (include && other == idx)))
    }

    /// Elements that cover `node` (immediately above it)
    pub fn covers(&self, node: &T) -> LatticeResult<Vec<&T>> {
        let idx = self.index_of(node)?;
        Ok(self.sorted(self.upper_cover_indices(idx)))
    }

    /// Elements covered by `node` (immediately below it)
    pub fn lower_covers(&self, node: &T) -> LatticeResult<Vec<&T>> {
        let idx = self.index_of(node)?;
        Ok(self.sorted(self.lower_cover_indices(idx)))
    }

    /// The dual lattice: order reversed, top and bottom swapped.
    ///
    /// The element arena is shared; the covering graph, derived order and
    /// topological order are new, so the two lattices are independent.
    pub fn inverse(&self) -> Self {
        let mut covering = self.covering.clone();
        covering.reverse();

        Self {
            elements: Arc::clone(&self.elements),
            relation: Arc::new(Reversed(Arc::clone(&self.relation))),
            covering,
            order: self.order.transposed(),
            topological: self.topological.iter().rev().copied().collect(),
            config: self.config.clone(),
        }
    }

    pub(crate) fn index_of(&self, node: &T) -> LatticeResult<usize> {
        self.elements
            .get_index_of(node)
            .ok_or_else(|| LatticeError::unknown_element(format!("{node:?}")))
    }

    pub(crate) fn lower_cover_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.covering
            .neighbors_directed(NodeIndex::new(idx), Direction::Outgoing)
            .map(NodeIndex::index)
    }

    pub(crate) fn upper_cover_indices(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.covering
            .neighbors_directed(NodeIndex::new(idx), Direction::Incoming)
            .map(NodeIndex::index)
    }

    /// Elements whose index passes `keep`, in topological order
    pub(crate) fn collect(&self, keep: impl Fn(usize) -> bool) -> Vec<&T> {
        self.topological
            .iter()
            .copied()
            .filter(|&idx| keep(idx))
            .map(|idx| &self.elements[idx])
            .collect()
    }

    fn sorted(&self, indices: impl Iterator<Item = usize>) -> Vec<&T> {
        let wanted: Vec<usize> = indices.collect();
        self.collect(|idx| wanted.contains(&idx))
    }
}

impl<T: Element + Label> Lattice<T> {
    /// Render `node` with the configured separators
    pub fn label(&self, node: &T) -> String {
        stringify(node, &self.config)
    }

    /// Labels of all elements, in topological order
    pub fn labels(&self) -> Vec<String> {
        self.topological_order()
            .into_iter()
            .map(|node| self.label(node))
            .collect()
    }
}

impl<T: Element> Clone for Lattice<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            relation: Arc::clone(&self.relation),
            covering: self.covering.clone(),
            order: self.order.clone(),
            topological: self.topological.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: Element> fmt::Debug for Lattice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("elements", &self.len())
            .field("cover_edges", &self.covering.edge_count())
            .field("top", self.top())
            .field("bottom", self.bottom())
            .finish()
    }
}
