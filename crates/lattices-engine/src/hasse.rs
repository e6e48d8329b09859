//! Covering (Hasse) graph construction
//!
//! 1. Every unordered pair is tested in both directions; a comparable pair
//!    becomes an edge of weight -1 from the greater element to the lesser.
//! 2. All-pairs shortest paths over those weights give, for each comparable
//!    pair, minus the length of the longest chain between them.
//! 3. Only pairs at distance exactly -1 (no element strictly between them)
//!    become cover edges. Longer chains are implied by transitivity.

use indexmap::IndexSet;
use lattices_core::{Element, LatticeError, LatticeResult, Order};
use petgraph::algo::floyd_warshall;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

/// Weight of one comparability edge; a cover is a path of total weight `COVER`.
const COVER: i32 = -1;

/// Build the covering graph over element indices.
///
/// Node `i` carries index `i` of `elements`; edges point from greater to
/// lesser.
pub(crate) fn covering_graph<T, O>(
    elements: &IndexSet<T>,
    relation: &O,
    strict_antisymmetry: bool,
) -> LatticeResult<DiGraph<usize, ()>>
where
    T: Element,
    O: Order<T> + ?Sized,
{
    let comparability = comparability_graph(elements, relation, strict_antisymmetry)?;

    let distances = floyd_warshall(&comparability, |edge| *edge.weight()).map_err(|_| {
        LatticeError::construction("relation is cyclic: the derived order is not antisymmetric")
    })?;

    let n = elements.len();
    let mut covering = DiGraph::with_capacity(n, n);
    for idx in 0..n {
        covering.add_node(idx);
    }
    // Index order keeps edge insertion deterministic
    for greater in 0..n {
        for lesser in 0..n {
            let key = (NodeIndex::new(greater), NodeIndex::new(lesser));
            if distances.get(&key) == Some(&COVER) {
                covering.add_edge(key.0, key.1, ());
            }
        }
    }

    debug!(
        elements = n,
        comparable_pairs = comparability.edge_count(),
        cover_edges = covering.edge_count(),
        "Reduced comparability graph to covering graph"
    );

    Ok(covering)
}

fn comparability_graph<T, O>(
    elements: &IndexSet<T>,
    relation: &O,
    strict_antisymmetry: bool,
) -> LatticeResult<DiGraph<usize, i32>>
where
    T: Element,
    O: Order<T> + ?Sized,
{
    let n = elements.len();
    let mut graph = DiGraph::with_capacity(n, n);
    for idx in 0..n {
        graph.add_node(idx);
    }

    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate().skip(i + 1) {
            let (ai, bj) = (NodeIndex::new(i), NodeIndex::new(j));
            match (relation.le(a, b), relation.le(b, a)) {
                (true, true) if strict_antisymmetry => {
                    return Err(LatticeError::construction(format!(
                        "relation is not antisymmetric: {a:?} <= {b:?} and {b:?} <= {a:?}"
                    )));
                }
                (true, true) => {
                    warn!(lesser = ?a, greater = ?b, "Both directions hold; keeping the first checked");
                    graph.add_edge(bj, ai, COVER);
                }
                (true, false) => {
                    graph.add_edge(bj, ai, COVER);
                }
                (false, true) => {
                    graph.add_edge(ai, bj, COVER);
                }
                (false, false) => {}
            }
        }
    }

    Ok(graph)
}
