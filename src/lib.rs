//! Apriori frequent itemset and association rule mining, with a replay that
//! estimates how much a cache informed by the mined rules would save.
//!
//! ```no_run
//! use apriori::{run, AprioriConfig, CsvFile};
//!
//! let source = CsvFile::new("INTEGRATED-DATASET.csv");
//! let (output, report) = run(&source, &AprioriConfig::default())?;
//! println!("{} rules, {:.2}% saved", output.rules.len(), report.improvement());
//! # Ok::<(), apriori::AprioriError>(())
//! ```

#[cfg(test)]
macro_rules! itemset {
    ($($x:expr),* $(,)?) => {
        {
            let mut set = $crate::types::Itemset::new();
            $(set.insert(String::from($x));)*
            set
        }
    };
}

pub mod cache;
pub mod combi;
pub mod config;
pub mod error;
pub mod itemset;
pub mod report;
pub mod rules;
pub mod source;
pub mod transactions;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

use tracing::info;

pub use crate::cache::{estimate, CacheReport};
pub use crate::config::{AprioriConfig, JoinStrategy};
pub use crate::error::{AprioriError, Result};
pub use crate::itemset::{generate_frequent_itemsets, FrequentItemsets, MinerOptions};
pub use crate::rules::{generate_rules, AssociationRule, RuleSet};
pub use crate::source::{CsvFile, MemorySource, TransactionSource};
pub use crate::transactions::index_transactions;

/// Frequent itemsets and the rules derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AprioriOutput {
    pub itemsets: FrequentItemsets,
    pub rules: RuleSet,
}

impl AprioriOutput {
    /// Frequent itemsets with their support, lowest support first.
    pub fn items(&self) -> Result<Vec<(types::Itemset, f32)>> {
        let mut items = self.itemsets.items_with_support()?;
        report::sort_by_support(&mut items);
        Ok(items)
    }

    /// Rules, lowest confidence first.
    pub fn sorted_rules(&self) -> Vec<&AssociationRule> {
        report::sort_by_confidence(&self.rules.rules)
    }
}

/// Mines `source` with the thresholds in `config`.
///
/// Thresholds are used as given; see [`AprioriConfig::validate`].
pub fn run_apriori<S>(source: &S, config: &AprioriConfig) -> Result<AprioriOutput>
where
    S: TransactionSource + ?Sized,
{
    let (item_set, transactions) = index_transactions(source.records()?)?;

    let options = MinerOptions {
        join: config.join,
        max_len: config.max_len,
    };
    let itemsets =
        generate_frequent_itemsets(&transactions, &item_set, config.min_support, &options);

    info!(min_confidence = config.min_confidence, "generating rules");
    let rules = generate_rules(
        &itemsets.levels,
        |itemset| itemsets.count(itemset),
        itemsets.num_transactions,
        config.min_confidence,
    )?;
    info!(rules = rules.len(), "rules generated");

    Ok(AprioriOutput { itemsets, rules })
}

/// Replays a fresh pass of `source` through the cache simulation.
pub fn run_cache<S>(source: &S, output: &AprioriOutput, unit_cost: f64) -> Result<CacheReport>
where
    S: TransactionSource + ?Sized,
{
    estimate(
        source.records()?,
        &output.rules.items,
        &output.rules.index,
        unit_cost,
    )
}

/// Mining followed by the cache replay, reading `source` twice.
pub fn run<S>(source: &S, config: &AprioriConfig) -> Result<(AprioriOutput, CacheReport)>
where
    S: TransactionSource + ?Sized,
{
    let output = run_apriori(source, config)?;
    let report = run_cache(source, &output, config.unit_cost)?;
    Ok((output, report))
}
