use itertools::Itertools;

use crate::types::{Itemset, ItemsetLength, ItemsetLevel};

/// Join a level with itself and return the itemsets of exactly `length` items.
///
/// Every pair is tried, not only pairs sharing a prefix, and no subset check
/// is applied. See [`prune_step`] for the closure filter.
pub fn join_step(itemsets: &ItemsetLevel, length: ItemsetLength) -> ItemsetLevel {
    itemsets
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| {
            let union: Itemset = a.union(b).cloned().collect();
            if union.len() == length {
                Some(union)
            } else {
                None
            }
        })
        .collect()
}

/// Drops every candidate with a one-smaller subset missing from `frequent`.
pub fn prune_step(candidates: ItemsetLevel, frequent: &ItemsetLevel) -> ItemsetLevel {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate.iter().all(|item| {
                let mut subset = candidate.clone();
                subset.remove(item);
                frequent.contains(&subset)
            })
        })
        .collect()
}

/// Non-empty proper subsets of an itemset, smallest first, each exactly once.
pub fn proper_subsets(itemset: &Itemset) -> impl Iterator<Item = Itemset> + '_ {
    (1..itemset.len()).flat_map(move |size| {
        itemset
            .iter()
            .combinations(size)
            .map(|combi| combi.into_iter().cloned().collect())
    })
}
