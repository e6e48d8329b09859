//! Elements and order relations
//!
//! An order is a single-method capability: `le(a, b)` answers "is `a` less
//! than or equal to `b`". Any `Fn(&T, &T) -> bool` closure is an order, and
//! the named orders below cover the set-of-sets constructions used by the
//! lattice catalogue:
//!
//! - [`SubsetOrder`]: inclusion (`a ⊆ b`)
//! - [`AntichainOrder`]: `α ≤ β` iff every `b ∈ β` sits above some `a ∈ α`
//! - [`RefinementOrder`]: `α ≤ β` iff every `a ∈ α` sits below some `b ∈ β`
//!
//! Compound orders are parameterised by the order on their members, so they
//! nest (`AntichainOrder<RefinementOrder<SubsetOrder>>`).

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Values a lattice can be built over.
///
/// Elements are compared by equality, used as lookup keys, and rendered with
/// `Debug` in error messages.
pub trait Element: Clone + Eq + Hash + Debug + 'static {}

impl<T> Element for T where T: Clone + Eq + Hash + Debug + 'static {}

/// A "less than or equal" relation over `T`
pub trait Order<T> {
    /// True if `a` is less than or equal to `b`
    fn le(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Order<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn le(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Shared, type-erased order as stored by a constructed lattice
pub type SharedOrder<T> = Arc<dyn Order<T> + Send + Sync>;

/// The dual of a shared order: `le'(a, b) = le(b, a)`
pub struct Reversed<T>(pub SharedOrder<T>);

impl<T> Order<T> for Reversed<T> {
    fn le(&self, a: &T, b: &T) -> bool {
        self.0.le(b, a)
    }
}

impl<T> Clone for Reversed<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

/// Set inclusion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubsetOrder;

impl<T: Ord> Order<BTreeSet<T>> for SubsetOrder {
    fn le(&self, a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
        a.is_subset(b)
    }
}

/// Antichain containment: `α ≤ β` iff for every `b ∈ β` there is an `a ∈ α`
/// with `a ≤ b` under the member order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AntichainOrder<O = SubsetOrder> {
    inner: O,
}

impl<O> AntichainOrder<O> {
    /// Antichain containment over the given member order
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    /// The member order
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<T, O> Order<BTreeSet<T>> for AntichainOrder<O>
where
    O: Order<T>,
{
    fn le(&self, alpha: &BTreeSet<T>, beta: &BTreeSet<T>) -> bool {
        beta.iter()
            .all(|b| alpha.iter().any(|a| self.inner.le(a, b)))
    }
}

/// Refinement: `α ≤ β` iff for every `a ∈ α` there is a `b ∈ β` with
/// `a ≤ b` under the member order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinementOrder<O = SubsetOrder> {
    inner: O,
}

impl<O> RefinementOrder<O> {
    /// Refinement over the given member order
    pub fn new(inner: O) -> Self {
        Self { inner }
    }

    /// The member order
    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<T, O> Order<BTreeSet<T>> for RefinementOrder<O>
where
    O: Order<T>,
{
    fn le(&self, alpha: &BTreeSet<T>, beta: &BTreeSet<T>) -> bool {
        alpha
            .iter()
            .all(|a| beta.iter().any(|b| self.inner.le(a, b)))
    }
}
