//! Powerset enumeration and label rendering tests

use lattices_core::{
    antichains, is_subset_antichain, powerset, stringify, Label, LatticeConfig, SubsetOrder,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn set(items: &[u8]) -> BTreeSet<u8> {
    items.iter().copied().collect()
}

// ============================================================================
// Powerset
// ============================================================================

#[test]
fn powerset_sizes() {
    let cases = [(vec![0u8, 1, 2], 0, 8), (vec![0, 1, 2], 1, 7), (vec![0, 1, 2], 2, 4), (vec![0], 0, 2)];
    for (items, min_size, expected) in cases {
        assert_eq!(powerset(items.clone(), min_size).len(), expected, "{items:?} / {min_size}");
    }
}

#[test]
fn powerset_contains_expected_subsets() {
    assert!(powerset([0u8, 1, 2], 0).contains(&set(&[])));
    assert!(powerset([0u8, 1, 2], 1).contains(&set(&[0])));
    assert!(powerset([0u8, 1, 2], 2).contains(&set(&[0, 1])));
    assert!(powerset([0u8], 0).contains(&set(&[])));
}

#[test]
fn powerset_respects_min_size() {
    assert!(!powerset([0u8, 1, 2], 0).contains(&set(&[3])));
    assert!(!powerset([0u8, 1, 2], 1).contains(&set(&[])));
    assert!(!powerset([0u8, 1, 2], 2).contains(&set(&[0])));
    assert!(!powerset([0u8], 0).contains(&set(&[1])));
}

#[test]
fn powerset_orders_by_size() {
    let sizes: Vec<usize> = powerset(0..4u8, 0).iter().map(BTreeSet::len).collect();
    let mut sorted = sizes.clone();
    sorted.sort_unstable();
    assert_eq!(sizes, sorted);
}

proptest! {
    /// Property: a powerset of n distinct items has 2^n members
    #[test]
    fn prop_powerset_size(items in prop::collection::btree_set(0u8..32, 0..8)) {
        prop_assert_eq!(powerset(items.clone(), 0).len(), 1usize << items.len());
    }

    /// Property: every enumerated antichain is an antichain, and every
    /// antichain among the subsets is enumerated
    #[test]
    fn prop_antichains_complete(items in prop::collection::btree_set(0u8..8, 1..4)) {
        let subsets = powerset(items, 1);
        let found: BTreeSet<BTreeSet<BTreeSet<u8>>> =
            antichains(subsets.clone(), &SubsetOrder, 0).into_iter().collect();
        for family in powerset(subsets, 0) {
            prop_assert_eq!(found.contains(&family), is_subset_antichain(&family));
        }
    }
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn set_of_sets_label() {
    let value: BTreeSet<BTreeSet<u8>> = [set(&[0, 1]), set(&[1, 2])].into_iter().collect();
    assert_eq!(stringify(&value, &LatticeConfig::default()), "01•12");
}

#[test]
fn deeper_nesting_uses_next_separator() {
    let inner: BTreeSet<BTreeSet<u8>> = [set(&[0]), set(&[1])].into_iter().collect();
    let other: BTreeSet<BTreeSet<u8>> = [set(&[1, 2])].into_iter().collect();
    let value: BTreeSet<BTreeSet<BTreeSet<u8>>> = [inner, other].into_iter().collect();

    assert_eq!(stringify(&value, &LatticeConfig::default()), "0꞉1•12");

    let rotated = LatticeConfig::with_symbols(["꞉", "⋮", "•"]);
    assert_eq!(stringify(&value, &rotated), "0⋮1꞉12");
}

#[test]
fn empty_set_uses_empty_symbol() {
    let empty: BTreeSet<u8> = BTreeSet::new();
    assert_eq!(stringify(&empty, &LatticeConfig::default()), "∅");

    let mut config = LatticeConfig::default();
    config.empty_symbol = "{}".to_string();
    assert_eq!(stringify(&empty, &config), "{}");
}

#[test]
fn longer_children_come_first() {
    let value: BTreeSet<BTreeSet<u8>> = [set(&[2]), set(&[0, 1]), set(&[3])].into_iter().collect();
    assert_eq!(value.render(&["|".to_string()], "∅"), "01|2|3");
}

#[test]
fn atoms_render_in_sorted_order() {
    let value: BTreeSet<&str> = ["c", "a", "b"].into_iter().collect();
    assert_eq!(stringify(&value, &LatticeConfig::default()), "abc");
}
