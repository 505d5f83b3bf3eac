use std::collections::{BTreeMap, BTreeSet, HashMap};

pub type Item = String;
pub type Itemset = BTreeSet<Item>;

/// One input record as read from a source, before duplicates collapse.
pub type RawTransaction = Vec<Item>;
pub type Transaction = BTreeSet<Item>;

pub type ItemsetLength = usize;
pub type ItemsetLevel = BTreeSet<Itemset>;

/// Raw occurrence count of every itemset ever evaluated, frequent or not.
pub type FrequencyTable = HashMap<Itemset, u32>;
pub type LevelFrequentSets = BTreeMap<ItemsetLength, ItemsetLevel>;

/// Antecedent item to the consequent of the last rule that contained it.
pub type RuleIndex = HashMap<Item, Itemset>;

/// Renders an itemset as `(a, b, c)` in item order.
pub fn display_itemset(itemset: &Itemset) -> String {
    let items: Vec<&str> = itemset.iter().map(String::as_str).collect();
    format!("({})", items.join(", "))
}
