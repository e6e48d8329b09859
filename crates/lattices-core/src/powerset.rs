//! Subset and antichain enumeration

use crate::order::Order;
use std::collections::BTreeSet;

/// All subsets of `items` with at least `min_size` members.
///
/// Duplicates in `items` are collapsed first. Subsets are produced by
/// increasing size, and within one size in lexicographic order of the sorted
/// items, so `powerset([0, 1, 2], 0)` yields `{}`, `{0}`, `{1}`, `{2}`,
/// `{0, 1}`, `{0, 2}`, `{1, 2}`, `{0, 1, 2}`.
pub fn powerset<T>(items: impl IntoIterator<Item = T>, min_size: usize) -> Vec<BTreeSet<T>>
where
    T: Ord + Clone,
{
    let items: Vec<T> = items.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let mut subsets = Vec::new();
    for size in min_size..=items.len() {
        let mut chosen = Vec::with_capacity(size);
        combinations(&items, size, 0, &mut chosen, &mut subsets);
    }
    subsets
}

fn combinations<T: Ord + Clone>(
    items: &[T],
    size: usize,
    start: usize,
    chosen: &mut Vec<usize>,
    out: &mut Vec<BTreeSet<T>>,
) {
    if chosen.len() == size {
        out.push(chosen.iter().map(|&i| items[i].clone()).collect());
        return;
    }
    let remaining = size - chosen.len();
    for next in start..=items.len().saturating_sub(remaining) {
        chosen.push(next);
        combinations(items, size, next + 1, chosen, out);
        chosen.pop();
    }
}

/// All antichains of `items` under `order` with at least `min_size` members.
///
/// Equivalent to filtering `powerset(items, min_size)` with
/// [`is_antichain`](crate::predicates::is_antichain), but members are only
/// added when incomparable with everything already chosen, so the search never
/// visits the (exponentially many) non-antichains. Results are ordered by
/// size.
pub fn antichains<T, O>(
    items: impl IntoIterator<Item = T>,
    order: &O,
    min_size: usize,
) -> Vec<BTreeSet<T>>
where
    T: Ord + Clone,
    O: Order<T> + ?Sized,
{
    let items: Vec<T> = items.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    let n = items.len();
    let mut comparable = vec![false; n * n];
    for a in 0..n {
        for b in 0..n {
            comparable[a * n + b] =
                a != b && (order.le(&items[a], &items[b]) || order.le(&items[b], &items[a]));
        }
    }

    let mut found = Vec::new();
    let mut chosen = Vec::new();
    extend_antichain(&items, &comparable, 0, &mut chosen, min_size, &mut found);
    found.sort_by_key(BTreeSet::len);
    found
}

fn extend_antichain<T: Ord + Clone>(
    items: &[T],
    comparable: &[bool],
    start: usize,
    chosen: &mut Vec<usize>,
    min_size: usize,
    out: &mut Vec<BTreeSet<T>>,
) {
    if chosen.len() >= min_size {
        out.push(chosen.iter().map(|&i| items[i].clone()).collect());
    }
    let n = items.len();
    for next in start..n {
        if chosen.iter().all(|&c| !comparable[c * n + next]) {
            chosen.push(next);
            extend_antichain(items, comparable, next + 1, chosen, min_size, out);
            chosen.pop();
        }
    }
}
