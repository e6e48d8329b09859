//! Derived properties: complements, irreducibles, lattice validity and the
//! distributive and modular laws

use crate::lattice::Lattice;
use lattices_core::{BoundKind, Element, LatticeError, LatticeResult};
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use tracing::{debug, warn};

/// Pairwise joins and meets over element indices
struct BoundTable {
    joins: Vec<usize>,
    meets: Vec<usize>,
    len: usize,
}

impl BoundTable {
    fn join(&self, a: usize, b: usize) -> usize {
        self.joins[a * self.len + b]
    }

    fn meet(&self, a: usize, b: usize) -> usize {
        self.meets[a * self.len + b]
    }
}

impl<T: Element> Lattice<T> {
    /// Elements `n` with `join(n, node) == top` and `meet(n, node) == bottom`
    pub fn complement(&self, node: &T) -> LatticeResult<Vec<&T>> {
        let idx = self.index_of(node)?;
        let top = self.topological[0];
        let bottom = self.topological[self.topological.len() - 1];

        let mut complements = Vec::new();
        for &other in &self.topological {
            let pair = [other, idx];
            if self.bound_index(BoundKind::Join, &pair, |_| true)? == top
                && self.bound_index(BoundKind::Meet, &pair, |_| true)? == bottom
            {
                complements.push(&self.elements[other]);
            }
        }
        Ok(complements)
    }

    /// Elements covering exactly one element
    pub fn join_irreducibles(&self) -> Vec<&T> {
        self.collect(|idx| self.degree(idx, Direction::Outgoing) == 1)
    }

    /// Elements covered by exactly one element
    pub fn meet_irreducibles(&self) -> Vec<&T> {
        self.collect(|idx| self.degree(idx, Direction::Incoming) == 1)
    }

    /// Elements that are both join- and meet-irreducible
    pub fn irreducibles(&self) -> Vec<&T> {
        self.collect(|idx| {
            self.degree(idx, Direction::Outgoing) == 1 && self.degree(idx, Direction::Incoming) == 1
        })
    }

    /// Confirm every pair has a unique join and a unique meet.
    ///
    /// Fails with [`LatticeError::NotALattice`] naming the first pair, in
    /// topological order, that does not.
    pub fn check_lattice(&self) -> LatticeResult<()> {
        for (pos, &a) in self.topological.iter().enumerate() {
            for &b in &self.topological[pos + 1..] {
                for kind in [BoundKind::Join, BoundKind::Meet] {
                    if let Err(err) = self.bound_index(kind, &[a, b], |_| true) {
                        return Err(LatticeError::not_a_lattice(format!(
                            "{:?} and {:?} have no unique {kind}: {err}",
                            self.elements[a], self.elements[b]
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether every pair has a unique join and meet
    pub fn validate(&self) -> bool {
        match self.check_lattice() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Lattice validation failed");
                false
            }
        }
    }

    /// Checks `a ∨ (b ∧ c) == (a ∨ b) ∧ (a ∨ c)` for every triple
    pub fn is_distributive(&self) -> LatticeResult<bool> {
        let table = self.bound_table()?;
        let n = self.len();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let lhs = table.join(a, table.meet(b, c));
                    let rhs = table.meet(table.join(a, b), table.join(a, c));
                    if lhs != rhs {
                        debug!(
                            a = ?self.elements[a],
                            b = ?self.elements[b],
                            c = ?self.elements[c],
                            "Distributive law fails"
                        );
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    /// Checks `(a ∧ c) ∨ (b ∧ c) == ((a ∧ c) ∨ b) ∧ c` for every triple
    pub fn is_modular(&self) -> LatticeResult<bool> {
        let table = self.bound_table()?;
        let n = self.len();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let ac = table.meet(a, c);
                    let lhs = table.join(ac, table.meet(b, c));
                    let rhs = table.meet(table.join(ac, b), c);
                    if lhs != rhs {
                        debug!(
                            a = ?self.elements[a],
                            b = ?self.elements[b],
                            c = ?self.elements[c],
                            "Modular law fails"
                        );
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    fn degree(&self, idx: usize, direction: Direction) -> usize {
        self.covering
            .neighbors_directed(NodeIndex::new(idx), direction)
            .count()
    }

    fn bound_table(&self) -> LatticeResult<BoundTable> {
        let len = self.len();
        let mut joins = vec![0; len * len];
        let mut meets = vec![0; len * len];
        for a in 0..len {
            joins[a * len + a] = a;
            meets[a * len + a] = a;
            for b in a + 1..len {
                let join = self.bound_index(BoundKind::Join, &[a, b], |_| true)?;
                let meet = self.bound_index(BoundKind::Meet, &[a, b], |_| true)?;
                joins[a * len + b] = join;
                joins[b * len + a] = join;
                meets[a * len + b] = meet;
                meets[b * len + a] = meet;
            }
        }
        Ok(BoundTable { joins, meets, len })
    }
}
