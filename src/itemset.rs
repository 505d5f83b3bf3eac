#![allow(non_snake_case)]

use tracing::{debug, info};

use crate::{
    combi::{join_step, prune_step},
    config::JoinStrategy,
    error::{AprioriError, Result},
    types::{
        FrequencyTable, Itemset, ItemsetLength, ItemsetLevel, LevelFrequentSets, Transaction,
    },
};

/// Knobs for the level-wise search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinerOptions {
    pub join: JoinStrategy,
    /// Stop after this level even if it still had frequent itemsets. Level 1
    /// is always mined, so `Some(0)` acts like `Some(1)`.
    pub max_len: Option<ItemsetLength>,
}

/// Outcome of one mining run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    pub frequencies: FrequencyTable,
    pub levels: LevelFrequentSets,
    pub num_transactions: usize,
}

impl FrequentItemsets {
    /// Fraction of transactions containing `itemset`.
    ///
    /// Fails with [`AprioriError::SupportNotFound`] when the itemset was never
    /// evaluated during mining.
    pub fn support(&self, itemset: &Itemset) -> Result<f32> {
        Ok(self.count(itemset)? as f32 / self.num_transactions as f32)
    }

    /// Raw number of transactions containing `itemset`.
    pub fn count(&self, itemset: &Itemset) -> Result<u32> {
        self.frequencies
            .get(itemset)
            .copied()
            .ok_or_else(|| AprioriError::SupportNotFound(itemset.iter().cloned().collect()))
    }

    /// Every frequent itemset of every level with its support, by level.
    pub fn items_with_support(&self) -> Result<Vec<(Itemset, f32)>> {
        self.levels
            .values()
            .flatten()
            .map(|itemset| Ok((itemset.clone(), self.support(itemset)?)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Level-wise Apriori over a materialized transaction list.
///
/// Level 1 evaluates `item_set`; each following level joins the previous
/// survivors. Every candidate is counted by a full scan of `transactions`
/// and its count is kept in the frequency table whether or not it
/// survives. The search ends at the first level with no survivors.
pub fn generate_frequent_itemsets(
    transactions: &[Transaction],
    item_set: &ItemsetLevel,
    min_support: f32,
    options: &MinerOptions,
) -> FrequentItemsets {
    let N = transactions.len();
    let mut frequencies = FrequencyTable::new();
    let mut levels = LevelFrequentSets::new();

    if N == 0 {
        info!("no transactions to mine");
        return FrequentItemsets::default();
    }

    info!(transactions = N, min_support, "mining frequent itemsets");

    let mut size: ItemsetLength = 1;
    let mut current = update_counts(
        item_set.iter().cloned(),
        transactions,
        min_support,
        &mut frequencies,
    );
    debug!(size, candidates = item_set.len(), frequent = current.len(), "level counted");

    while !current.is_empty() {
        if options.max_len.map_or(false, |max_len| size >= max_len) {
            levels.insert(size, current);
            break;
        }

        let mut candidates = join_step(&current, size + 1);
        if options.join == JoinStrategy::ClosurePruned {
            candidates = prune_step(candidates, &current);
        }
        let num_candidates = candidates.len();

        let next = update_counts(
            candidates.into_iter(),
            transactions,
            min_support,
            &mut frequencies,
        );
        debug!(
            size = size + 1,
            candidates = num_candidates,
            frequent = next.len(),
            "level counted"
        );

        levels.insert(size, current);
        current = next;
        size += 1;
    }

    info!(levels = levels.len(), evaluated = frequencies.len(), "mining finished");

    FrequentItemsets {
        frequencies,
        levels,
        num_transactions: N,
    }
}

/// Counts each candidate against every transaction and keeps those
/// meeting `min_support`. Counts of all candidates land in `frequencies`.
fn update_counts<I>(
    candidates: I,
    transactions: &[Transaction],
    min_support: f32,
    frequencies: &mut FrequencyTable,
) -> ItemsetLevel
where
    I: Iterator<Item = Itemset>,
{
    let N = transactions.len() as f32;

    candidates
        .filter_map(|candidate| {
            let candidate_count = transactions
                .iter()
                .filter(|transaction| candidate.is_subset(transaction))
                .count() as u32;
            frequencies.insert(candidate.clone(), candidate_count);

            if candidate_count as f32 / N >= min_support {
                Some(candidate)
            } else {
                None
            }
        })
        .collect()
}
