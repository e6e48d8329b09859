//! Order query and bound tests
//!
//! Covers ascendants, descendants, covers, join and meet on the standard
//! five-element lattices and on the free distributive lattice over three
//! items.

use assert_matches::assert_matches;
use lattices_engine::{free_distributive_lattice, m3, n5, BoundKind, Family, LatticeError};
use std::collections::BTreeSet;

fn names<'a>(nodes: Vec<&&'a str>) -> BTreeSet<&'a str> {
    nodes.into_iter().copied().collect()
}

fn expected<'a>(nodes: &[&'a str]) -> BTreeSet<&'a str> {
    nodes.iter().copied().collect()
}

fn family(sets: &[&[u8]]) -> Family<u8> {
    sets.iter()
        .map(|set| set.iter().copied().collect())
        .collect()
}

// ============================================================================
// Ascendants and descendants
// ============================================================================

#[test]
fn ascendants() {
    let m3 = m3().unwrap();
    let n5 = n5().unwrap();

    assert_eq!(names(m3.ascendants(&"0", false).unwrap()), expected(&["a", "b", "c", "1"]));
    assert_eq!(names(m3.ascendants(&"a", false).unwrap()), expected(&["1"]));
    assert!(m3.ascendants(&"1", false).unwrap().is_empty());
    assert_eq!(names(n5.ascendants(&"c", false).unwrap()), expected(&["1"]));
    assert_eq!(names(n5.ascendants(&"a", false).unwrap()), expected(&["b", "1"]));
}

#[test]
fn descendants() {
    let m3 = m3().unwrap();
    let n5 = n5().unwrap();

    assert!(m3.descendants(&"0", false).unwrap().is_empty());
    assert_eq!(names(m3.descendants(&"a", false).unwrap()), expected(&["0"]));
    assert_eq!(names(m3.descendants(&"1", false).unwrap()), expected(&["a", "b", "c", "0"]));
    assert_eq!(names(n5.descendants(&"c", false).unwrap()), expected(&["0"]));
    assert_eq!(names(n5.descendants(&"b", false).unwrap()), expected(&["a", "0"]));
}

#[test]
fn include_adds_the_node_itself() {
    for lattice in [m3().unwrap(), n5().unwrap()] {
        for node in ["0", "a", "1", "c"] {
            assert!(lattice.ascendants(&node, true).unwrap().contains(&&node));
            assert!(lattice.descendants(&node, true).unwrap().contains(&&node));
            assert!(!lattice.ascendants(&node, false).unwrap().contains(&&node));
        }
    }
}

#[test]
fn results_follow_topological_order() {
    let n5 = n5().unwrap();
    let order = n5.topological_order();

    assert_eq!(n5.descendants(&"1", false).unwrap(), order[1..].to_vec());
    assert_eq!(n5.ascendants(&"0", false).unwrap(), order[..order.len() - 1].to_vec());
    assert_eq!(order.first(), Some(&&"1"));
    assert_eq!(order.last(), Some(&&"0"));
}

#[test]
fn covers_and_lower_covers() {
    let n5 = n5().unwrap();

    assert_eq!(names(n5.covers(&"0").unwrap()), expected(&["a", "c"]));
    assert_eq!(names(n5.covers(&"a").unwrap()), expected(&["b"]));
    assert!(n5.covers(&"1").unwrap().is_empty());
    assert_eq!(names(n5.lower_covers(&"1").unwrap()), expected(&["b", "c"]));
    assert!(n5.lower_covers(&"0").unwrap().is_empty());
}

#[test]
fn derived_order_is_transitive() {
    let n5 = n5().unwrap();
    assert!(n5.le(&"a", &"1").unwrap());
    assert!(n5.le(&"0", &"b").unwrap());
    assert!(n5.le(&"c", &"c").unwrap());
    assert!(!n5.le(&"c", &"b").unwrap());
}

#[test]
fn unknown_elements_are_rejected() {
    let m3 = m3().unwrap();
    assert_matches!(m3.ascendants(&"z", false), Err(LatticeError::UnknownElement { .. }));
    assert_matches!(m3.join([&"a", &"z"]), Err(LatticeError::UnknownElement { .. }));
    assert_matches!(m3.le(&"z", &"a"), Err(LatticeError::UnknownElement { .. }));
    assert!(!m3.contains(&"z"));
}

// ============================================================================
// Join and meet
// ============================================================================

#[test]
fn join() {
    let m3 = m3().unwrap();
    let n5 = n5().unwrap();

    assert_eq!(m3.join([&"0", &"a"]).unwrap(), &"a");
    assert_eq!(m3.join([&"a", &"b"]).unwrap(), &"1");
    assert_eq!(m3.join([&"a", &"1"]).unwrap(), &"1");
    assert_eq!(n5.join([&"a", &"c"]).unwrap(), &"1");
    assert_eq!(n5.join([&"b", &"c"]).unwrap(), &"1");
    assert_eq!(n5.join([&"a", &"b"]).unwrap(), &"b");
}

#[test]
fn meet() {
    let m3 = m3().unwrap();
    let n5 = n5().unwrap();

    assert_eq!(m3.meet([&"0", &"a"]).unwrap(), &"0");
    assert_eq!(m3.meet([&"a", &"b"]).unwrap(), &"0");
    assert_eq!(m3.meet([&"a", &"1"]).unwrap(), &"a");
    assert_eq!(n5.meet([&"a", &"c"]).unwrap(), &"0");
    assert_eq!(n5.meet([&"b", &"c"]).unwrap(), &"0");
    assert_eq!(n5.meet([&"a", &"b"]).unwrap(), &"a");
}

#[test]
fn empty_and_single_arguments() {
    let n5 = n5().unwrap();
    assert_eq!(n5.join([]).unwrap(), &"0");
    assert_eq!(n5.meet([]).unwrap(), &"1");
    assert_eq!(n5.join([&"c"]).unwrap(), &"c");
    assert_eq!(n5.join([&"a", &"b", &"c"]).unwrap(), &"1");
}

#[test]
fn join_with_predicate_reports_ambiguity() {
    let lattice = free_distributive_lattice(0..3u8).unwrap();
    let a = family(&[&[0], &[1]]);
    let b = family(&[&[0], &[2]]);

    let result = lattice.join_where([&a, &b], |node| node.len() == 1);
    assert_matches!(
        result,
        Err(LatticeError::AmbiguousBound { kind: BoundKind::Join, ref candidates }) if candidates.len() == 2
    );

    // Without the predicate the join is unique
    let join = lattice.join([&a, &b]).unwrap();
    assert_eq!(join, &family(&[&[0], &[1, 2]]));
}

#[test]
fn meet_with_predicate() {
    let lattice = free_distributive_lattice(0..3u8).unwrap();
    let a = family(&[&[0, 1]]);
    let b = family(&[&[0, 2]]);

    let meet = lattice.meet_where([&a, &b], |node| node.len() == 1).unwrap();
    assert_eq!(meet, &family(&[&[0]]));
}

#[test]
fn predicate_with_no_survivors() {
    let m3 = m3().unwrap();
    assert_matches!(
        m3.join_where([&"a", &"b"], |node| *node == "0"),
        Err(LatticeError::NoBound { kind: BoundKind::Join })
    );
    assert_matches!(
        m3.meet_where([&"a", &"b"], |_| false),
        Err(LatticeError::NoBound { kind: BoundKind::Meet })
    );
}
