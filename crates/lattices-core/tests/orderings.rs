//! Ordering relation tests
//!
//! Antichain containment and refinement over families of integer sets.

use lattices_core::{AntichainOrder, Order, RefinementOrder, SubsetOrder};
use std::collections::BTreeSet;

type Family = BTreeSet<BTreeSet<u8>>;

fn family(sets: &[&[u8]]) -> Family {
    sets.iter().map(|s| s.iter().copied().collect()).collect()
}

// ============================================================================
// Antichain containment
// ============================================================================

#[test]
fn antichain_le_holds() {
    let order = AntichainOrder::<SubsetOrder>::default();
    let cases = [
        (family(&[&[0], &[1]]), family(&[&[0]])),
        (family(&[&[0], &[1], &[2]]), family(&[&[0, 1], &[1, 2]])),
    ];
    for (a, b) in cases {
        assert!(order.le(&a, &b), "{a:?} <= {b:?}");
    }
}

#[test]
fn antichain_le_fails() {
    let order = AntichainOrder::<SubsetOrder>::default();
    let cases = [
        (family(&[&[0], &[1]]), family(&[&[2]])),
        (family(&[&[0, 1], &[1, 2]]), family(&[&[0], &[1]])),
        (family(&[&[0]]), family(&[&[1]])),
    ];
    for (a, b) in cases {
        assert!(!order.le(&a, &b), "{a:?} should not be <= {b:?}");
    }
}

// ============================================================================
// Refinement
// ============================================================================

#[test]
fn refinement_le_holds() {
    let order = RefinementOrder::<SubsetOrder>::default();
    let cases = [
        (family(&[&[0], &[1]]), family(&[&[0, 1]])),
        (family(&[&[0, 1], &[0, 2], &[1, 2]]), family(&[&[0, 1, 2]])),
    ];
    for (a, b) in cases {
        assert!(order.le(&a, &b), "{a:?} <= {b:?}");
    }
}

#[test]
fn refinement_le_fails() {
    let order = RefinementOrder::<SubsetOrder>::default();
    let cases = [
        (family(&[&[0], &[1]]), family(&[&[2]])),
        (family(&[&[0, 1], &[2]]), family(&[&[0], &[1], &[2]])),
        (family(&[&[0, 1], &[2]]), family(&[&[0, 2], &[1]])),
    ];
    for (a, b) in cases {
        assert!(!order.le(&a, &b), "{a:?} should not be <= {b:?}");
    }
}

#[test]
fn compound_orders_nest() {
    // Antichains of partitions compared through refinement of their members
    let order = AntichainOrder::new(RefinementOrder::new(SubsetOrder));
    let fine: BTreeSet<Family> = [family(&[&[0], &[1]])].into_iter().collect();
    let coarse: BTreeSet<Family> = [family(&[&[0, 1]])].into_iter().collect();
    assert!(order.le(&fine, &coarse));
    assert!(!order.le(&coarse, &fine));
}
