//! Conditions on families of sets
//!
//! Callers use these to filter candidate element collections (usually drawn
//! from a powerset) before handing them to the lattice engine.

use crate::order::{Order, SubsetOrder};
use indexmap::IndexMap;
use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use std::collections::BTreeSet;

/// True if no two distinct members are comparable under `order`.
pub fn is_antichain<'a, T, O>(members: impl IntoIterator<Item = &'a T>, order: &O) -> bool
where
    T: 'a,
    O: Order<T> + ?Sized,
{
    let members: Vec<&T> = members.into_iter().collect();
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            if order.le(a, b) || order.le(b, a) {
                return false;
            }
        }
    }
    true
}

/// [`is_antichain`] under set inclusion.
pub fn is_subset_antichain<'a, T>(sets: impl IntoIterator<Item = &'a BTreeSet<T>>) -> bool
where
    T: Ord + 'a,
{
    is_antichain(sets, &SubsetOrder)
}

/// True if every item of `alphabet` appears in some member, and nothing else does.
pub fn is_cover<'a, T>(
    sets: impl IntoIterator<Item = &'a BTreeSet<T>>,
    alphabet: impl IntoIterator<Item = T>,
) -> bool
where
    T: Ord + Clone + 'a,
{
    let union: BTreeSet<T> = sets.into_iter().flatten().cloned().collect();
    let alphabet: BTreeSet<T> = alphabet.into_iter().collect();
    union == alphabet
}

/// True if the members are pairwise disjoint and cover `alphabet`.
pub fn is_partition<'a, T>(
    sets: impl IntoIterator<Item = &'a BTreeSet<T>>,
    alphabet: impl IntoIterator<Item = T>,
) -> bool
where
    T: Ord + Clone + 'a,
{
    let sets: Vec<&BTreeSet<T>> = sets.into_iter().collect();
    let pairwise_disjoint = sets
        .iter()
        .enumerate()
        .all(|(i, a)| sets[i + 1..].iter().all(|b| a.is_disjoint(b)));
    pairwise_disjoint && is_cover(sets, alphabet)
}

/// True if the co-occurrence graph of the members has at most one component.
///
/// Two items are linked when some member contains both. Items that only ever
/// appear alone contribute no vertex, so a family of singletons counts as
/// connected.
pub fn is_connected<'a, T>(sets: impl IntoIterator<Item = &'a BTreeSet<T>>) -> bool
where
    T: Ord + std::hash::Hash + 'a,
{
    let mut graph = UnGraph::<&T, ()>::new_undirected();
    let mut vertices = IndexMap::new();

    for set in sets {
        let items: Vec<&T> = set.iter().collect();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                let a_idx = *vertices.entry(*a).or_insert_with(|| graph.add_node(*a));
                let b_idx = *vertices.entry(*b).or_insert_with(|| graph.add_node(*b));
                graph.add_edge(a_idx, b_idx, ());
            }
        }
    }

    connected_components(&graph) <= 1
}
