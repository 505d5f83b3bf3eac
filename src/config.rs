use crate::error::{AprioriError, Result};

pub const DEFAULT_MIN_SUPPORT: f32 = 0.15;
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;
pub const DEFAULT_UNIT_COST: f64 = 2.0;

/// How level k+1 candidates are formed from the frequent k-itemsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Union of every pair whose union has k+1 items.
    Pairwise,
    /// Pairwise join, then drop candidates with a k-subset that is not frequent.
    ClosurePruned,
}

impl Default for JoinStrategy {
    fn default() -> Self {
        JoinStrategy::Pairwise
    }
}

#[derive(Debug, Clone)]
pub struct AprioriConfig {
    pub min_support: f32,
    pub min_confidence: f32,
    pub unit_cost: f64,
    /// Largest itemset size to explore; unbounded when `None`.
    pub max_len: Option<usize>,
    pub join: JoinStrategy,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            unit_cost: DEFAULT_UNIT_COST,
            max_len: None,
            join: JoinStrategy::default(),
        }
    }
}

impl AprioriConfig {
    /// Rejects thresholds outside (0, 1], non-positive unit costs and a
    /// `max_len` of 0.
    ///
    /// The mining functions accept any value; callers facing user input run this first.
    pub fn validate(&self) -> Result<()> {
        check_fraction("min_support", self.min_support)?;
        check_fraction("min_confidence", self.min_confidence)?;
        if !(self.unit_cost.is_finite() && self.unit_cost > 0.0) {
            return Err(AprioriError::InvalidUnitCost(self.unit_cost));
        }
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidMaxLen);
        }
        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AprioriError::InvalidThreshold { name, value })
    }
}
