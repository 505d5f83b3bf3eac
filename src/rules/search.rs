use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::{
    combi::proper_subsets,
    error::Result,
    rules::rule::AssociationRule,
    types::{Item, Itemset, LevelFrequentSets, RuleIndex},
};

/// Rules mined from one set of frequent itemsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    /// Rules in the order they were generated.
    pub rules: Vec<AssociationRule>,
    /// Each antecedent item mapped to the consequent of the last rule that
    /// contained it. Earlier rules sharing the item are overwritten.
    pub index: RuleIndex,
    /// Every item appearing in a frequent itemset of any level.
    pub items: BTreeSet<Item>,
}

impl RuleSet {
    /// Every rule per antecedent item, without the overwriting of [`RuleSet::index`].
    pub fn rules_by_item(&self) -> HashMap<&Item, Vec<&AssociationRule>> {
        let mut by_item: HashMap<&Item, Vec<&AssociationRule>> = HashMap::new();
        for rule in &self.rules {
            for item in &rule.antecedent {
                by_item.entry(item).or_default().push(rule);
            }
        }
        by_item
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Generate rules based on frequent itemsets.
///
/// Levels are visited in increasing size, skipping level 1. Each itemset is
/// split on every non-empty proper subset; splits whose confidence reaches
/// `min_conf` become rules. `count` gives the raw support count of any
/// evaluated itemset out of `N` transactions.
#[allow(non_snake_case)]
pub fn generate_rules<F>(
    levels: &LevelFrequentSets,
    count: F,
    N: usize,
    min_conf: f32,
) -> Result<RuleSet>
where
    F: Fn(&Itemset) -> Result<u32>,
{
    let mut rule_set = RuleSet::default();

    for itemset in levels.values().flatten() {
        rule_set.items.extend(itemset.iter().cloned());
    }

    for (&itemset_size, itemsets) in levels.range(2..) {
        let before = rule_set.rules.len();

        for combi in itemsets {
            for antecedent in proper_subsets(combi) {
                let mut rule = AssociationRule::from_split(combi, antecedent);
                if !rule.compute_confidence(&count, N)? {
                    continue;
                }
                if rule.confidence < min_conf {
                    continue;
                }

                trace!(%rule, confidence = rule.confidence, "rule emitted");
                for item in &rule.antecedent {
                    rule_set.index.insert(item.clone(), rule.consequent.clone());
                }
                rule_set.rules.push(rule);
            }
        }

        debug!(
            size = itemset_size,
            rules = rule_set.rules.len() - before,
            "rules generated"
        );
    }

    Ok(rule_set)
}
