//! Replays the transaction stream against a cost model that serves
//! frequent and rule-predicted items from a cache.
//!
//! Nothing is evicted: both cache sets only grow for the length of one
//! replay. A cached access costs 1, anything else costs `unit_cost`.

use std::collections::{BTreeSet, HashSet};

use tracing::info;

use crate::error::Result;
use crate::types::{Item, RawTransaction, RuleIndex, Transaction};

const CACHED_ACCESS_COST: f64 = 1.0;

/// How a single item access was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Prefetched because an earlier item predicted it through a rule.
    RuleHit,
    /// Cached because the item is frequent.
    FrequentHit,
    Miss,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheReport {
    /// Cost with every access paying `unit_cost`.
    pub baseline_time: f64,
    pub cached_time: f64,
    pub frequent_hits: u64,
    pub rule_hits: u64,
    pub accesses: u64,
}

impl CacheReport {
    /// Percentage of the baseline cost saved by caching.
    pub fn improvement(&self) -> f64 {
        if self.baseline_time == 0.0 {
            return 0.0;
        }
        (self.baseline_time - self.cached_time) / self.baseline_time * 100.0
    }

    pub fn misses(&self) -> u64 {
        self.accesses - self.frequent_hits - self.rule_hits
    }
}

/// Cache state for one replay.
pub struct CacheSimulation<'a> {
    frequent_items: &'a BTreeSet<Item>,
    rule_index: &'a RuleIndex,
    unit_cost: f64,
    frequent_cache: HashSet<Item>,
    rule_cache: HashSet<Item>,
    report: CacheReport,
}

impl<'a> CacheSimulation<'a> {
    pub fn new(frequent_items: &'a BTreeSet<Item>, rule_index: &'a RuleIndex, unit_cost: f64) -> Self {
        Self {
            frequent_items,
            rule_index,
            unit_cost,
            frequent_cache: HashSet::new(),
            rule_cache: HashSet::new(),
            report: CacheReport::default(),
        }
    }

    /// Updates both caches for `item`, then charges the access.
    pub fn access(&mut self, item: &Item) -> Access {
        if self.frequent_items.contains(item) {
            self.frequent_cache.insert(item.clone());
        }
        if let Some(consequent) = self.rule_index.get(item) {
            self.rule_cache.extend(consequent.iter().cloned());
        }

        let access = if self.rule_cache.contains(item) {
            self.report.rule_hits += 1;
            Access::RuleHit
        } else if self.frequent_cache.contains(item) {
            self.report.frequent_hits += 1;
            Access::FrequentHit
        } else {
            Access::Miss
        };

        self.report.cached_time += match access {
            Access::Miss => self.unit_cost,
            _ => CACHED_ACCESS_COST,
        };
        self.report.baseline_time += self.unit_cost;
        self.report.accesses += 1;

        access
    }

    pub fn replay(&mut self, transaction: &Transaction) {
        for item in transaction {
            self.access(item);
        }
    }

    pub fn report(&self) -> CacheReport {
        self.report
    }
}

/// Walks `records` once and estimates the time saved by caching.
pub fn estimate<I>(
    records: I,
    frequent_items: &BTreeSet<Item>,
    rule_index: &RuleIndex,
    unit_cost: f64,
) -> Result<CacheReport>
where
    I: IntoIterator<Item = Result<RawTransaction>>,
{
    let mut simulation = CacheSimulation::new(frequent_items, rule_index, unit_cost);
    for record in records {
        let transaction: Transaction = record?.into_iter().collect();
        simulation.replay(&transaction);
    }

    let report = simulation.report();
    info!(
        baseline = report.baseline_time,
        cached = report.cached_time,
        rule_hits = report.rule_hits,
        frequent_hits = report.frequent_hits,
        "cache replay finished"
    );
    Ok(report)
}

/// Cost of `records` with no cache at all.
pub fn baseline_time<I>(records: I, unit_cost: f64) -> Result<f64>
where
    I: IntoIterator<Item = Result<RawTransaction>>,
{
    let mut total = 0.0;
    for record in records {
        let transaction: Transaction = record?.into_iter().collect();
        total += unit_cost * transaction.len() as f64;
    }
    Ok(total)
}
