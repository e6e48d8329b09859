//! Join and meet
//!
//! Both bounds use the same technique: intersect the up-closures (join) or
//! down-closures (meet) of the arguments, optionally filter the common bounds
//! with a predicate, and keep the minimal (join) or maximal (meet) survivors.
//! Exactly one survivor is the answer; none or several is an error.

use crate::lattice::Lattice;
use lattices_core::{BoundKind, Element, LatticeError, LatticeResult};
use tracing::trace;

impl<T: Element> Lattice<T> {
    /// Least upper bound of `nodes`. An empty argument list yields the bottom.
    pub fn join<'n, I>(&self, nodes: I) -> LatticeResult<&T>
    where
        I: IntoIterator<Item = &'n T>,
        T: 'n,
    {
        self.join_where(nodes, |_| true)
    }

    /// Least upper bound of `nodes` among the elements satisfying `predicate`
    pub fn join_where<'n, I, P>(&self, nodes: I, predicate: P) -> LatticeResult<&T>
    where
        I: IntoIterator<Item = &'n T>,
        T: 'n,
        P: Fn(&T) -> bool,
    {
        let ids = self.indices(nodes)?;
        let idx = self.bound_index(BoundKind::Join, &ids, |c| predicate(&self.elements[c]))?;
        Ok(&self.elements[idx])
    }

    /// Greatest lower bound of `nodes`. An empty argument list yields the top.
    pub fn meet<'n, I>(&self, nodes: I) -> LatticeResult<&T>
    where
        I: IntoIterator<Item = &'n T>,
        T: 'n,
    {
        self.meet_where(nodes, |_| true)
    }

    /// Greatest lower bound of `nodes` among the elements satisfying `predicate`
    pub fn meet_where<'n, I, P>(&self, nodes: I, predicate: P) -> LatticeResult<&T>
    where
        I: IntoIterator<Item = &'n T>,
        T: 'n,
        P: Fn(&T) -> bool,
    {
        let ids = self.indices(nodes)?;
        let idx = self.bound_index(BoundKind::Meet, &ids, |c| predicate(&self.elements[c]))?;
        Ok(&self.elements[idx])
    }

    fn indices<'n, I>(&self, nodes: I) -> LatticeResult<Vec<usize>>
    where
        I: IntoIterator<Item = &'n T>,
        T: 'n,
    {
        nodes.into_iter().map(|node| self.index_of(node)).collect()
    }

    /// The unique extremal common bound of `ids`, over element indices
    pub(crate) fn bound_index(
        &self,
        kind: BoundKind,
        ids: &[usize],
        keep: impl Fn(usize) -> bool,
    ) -> LatticeResult<usize> {
        let bounds = |c: usize, i: usize| match kind {
            BoundKind::Join => self.order.le(i, c),
            BoundKind::Meet => self.order.le(c, i),
        };
        let candidates: Vec<usize> = self
            .topological
            .iter()
            .copied()
            .filter(|&c| ids.iter().all(|&i| bounds(c, i)) && keep(c))
            .collect();

        // A candidate strictly beyond another candidate is not extremal
        let extremal: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&c| {
                !candidates
                    .iter()
                    .any(|&other| other != c && bounds(c, other))
            })
            .collect();

        trace!(
            %kind,
            arguments = ids.len(),
            candidates = candidates.len(),
            extremal = extremal.len(),
            "Computed bound"
        );

        match extremal.as_slice() {
            [] => Err(LatticeError::no_bound(kind)),
            [single] => Ok(*single),
            several => Err(LatticeError::ambiguous_bound(
                kind,
                several
                    .iter()
                    .map(|&c| format!("{:?}", self.elements[c]))
                    .collect(),
            )),
        }
    }
}
