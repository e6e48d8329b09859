//! Named lattices
//!
//! Builders for the standard lattices over a finite alphabet of items, plus
//! the two five-element lattices M3 and N5. Every builder enumerates its
//! element family with [`antichains`] (partitions, dependencies and free
//! distributive elements are all antichains of some family) and filters it
//! with the predicates from `lattices-core`.

use crate::lattice::Lattice;
use lattices_core::{
    antichains, is_connected, is_cover, is_partition, powerset, AntichainOrder, Element,
    LatticeConfig, LatticeResult, RefinementOrder, SubsetOrder,
};
use std::collections::BTreeSet;
use tracing::debug;

/// A family of subsets of the alphabet
pub type Family<T> = BTreeSet<BTreeSet<T>>;

/// Label separators for partitions
const PARTITION_SYMBOLS: &str = "|";

/// Label separators for dependencies
const DEPENDENCY_SYMBOLS: &str = "꞉⋮•";

fn alphabet<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

fn partitions<T: Element + Ord>(items: &[T]) -> Vec<Family<T>> {
    antichains(powerset(items.iter().cloned(), 1), &SubsetOrder, 1)
        .into_iter()
        .filter(|family| is_partition(family, items.iter().cloned()))
        .collect()
}

fn dependencies<T: Element + Ord>(items: &[T], cover: bool, connected: bool) -> Vec<Family<T>> {
    antichains(powerset(items.iter().cloned(), 1), &SubsetOrder, 0)
        .into_iter()
        .filter(|family| !cover || is_cover(family, items.iter().cloned()))
        .filter(|family| !connected || is_connected(family))
        .collect()
}

/// All subsets of `items`, ordered by inclusion
pub fn powerset_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
) -> LatticeResult<Lattice<BTreeSet<T>>> {
    Lattice::new(powerset(items, 0), SubsetOrder)
}

/// All partitions of `items`, ordered by refinement
pub fn partition_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
) -> LatticeResult<Lattice<Family<T>>> {
    let items = alphabet(items);
    let partitions = partitions(&items);
    debug!(items = items.len(), partitions = partitions.len(), "Enumerated partitions");

    Lattice::with_config(
        partitions,
        RefinementOrder::<SubsetOrder>::default(),
        LatticeConfig::with_symbols(LatticeConfig::symbols_from_str(PARTITION_SYMBOLS)),
    )
}

/// The free distributive lattice over `items`: non-empty antichains of
/// non-empty subsets, ordered by antichain containment
pub fn free_distributive_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
) -> LatticeResult<Lattice<Family<T>>> {
    let families = antichains(powerset(items, 1), &SubsetOrder, 1);
    Lattice::new(families, AntichainOrder::<SubsetOrder>::default())
}

/// Antichains of non-empty subsets of `items`, ordered by refinement.
///
/// With `cover` only antichains whose union is all of `items` are kept; with
/// `connected` only those whose co-occurrence graph is connected.
pub fn dependency_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
    cover: bool,
    connected: bool,
) -> LatticeResult<Lattice<Family<T>>> {
    let items = alphabet(items);
    let dependencies = dependencies(&items, cover, connected);
    debug!(
        items = items.len(),
        dependencies = dependencies.len(),
        cover,
        connected,
        "Enumerated dependencies"
    );

    Lattice::with_config(
        dependencies,
        RefinementOrder::<SubsetOrder>::default(),
        LatticeConfig::with_symbols(LatticeConfig::symbols_from_str(DEPENDENCY_SYMBOLS)),
    )
}

/// Non-empty antichains (under refinement) of the dependencies of
/// [`dependency_lattice`], ordered by antichain containment over refinement
pub fn dependency_antichain_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
    cover: bool,
    connected: bool,
) -> LatticeResult<Lattice<BTreeSet<Family<T>>>> {
    let items = alphabet(items);
    let refinement = RefinementOrder::<SubsetOrder>::default();
    let families = antichains(dependencies(&items, cover, connected), &refinement, 1);
    debug!(items = items.len(), antichains = families.len(), "Enumerated dependency antichains");

    Lattice::new(families, AntichainOrder::new(refinement))
}

/// Non-empty antichains (under refinement) of the partitions of `items`,
/// ordered by antichain containment over refinement
pub fn partition_antichain_lattice<T: Element + Ord>(
    items: impl IntoIterator<Item = T>,
) -> LatticeResult<Lattice<BTreeSet<Family<T>>>> {
    let items = alphabet(items);
    let refinement = RefinementOrder::<SubsetOrder>::default();
    let families = antichains(partitions(&items), &refinement, 1);
    debug!(items = items.len(), antichains = families.len(), "Enumerated partition antichains");

    Lattice::new(families, AntichainOrder::new(refinement))
}

const FIVE_ELEMENTS: [&str; 5] = ["0", "a", "b", "c", "1"];

fn m3_order(a: &&'static str, b: &&'static str) -> bool {
    *a == "0" || *b == "1"
}

fn n5_order(a: &&'static str, b: &&'static str) -> bool {
    *a == "0" || *b == "1" || (*a == "a" && *b == "b")
}

/// The smallest non-distributive lattice: `0 < a, b, c < 1`
pub fn m3() -> LatticeResult<Lattice<&'static str>> {
    Lattice::new(FIVE_ELEMENTS, m3_order)
}

/// The smallest non-modular lattice: `0 < a < b < 1` and `0 < c < 1`
pub fn n5() -> LatticeResult<Lattice<&'static str>> {
    Lattice::new(FIVE_ELEMENTS, n5_order)
}
