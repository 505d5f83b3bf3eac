//! Text output for a run: itemsets by support, rules by confidence, and
//! the cache summary.

use std::io::{self, Write};

use crate::cache::CacheReport;
use crate::rules::AssociationRule;
use crate::types::{display_itemset, Itemset};

/// Sorts by support, lowest first. Ties keep their level order.
pub fn sort_by_support(items: &mut [(Itemset, f32)]) {
    items.sort_by(|(_, a), (_, b)| a.total_cmp(b));
}

/// Rules by confidence, lowest first. Ties keep generation order.
pub fn sort_by_confidence(rules: &[AssociationRule]) -> Vec<&AssociationRule> {
    let mut sorted: Vec<&AssociationRule> = rules.iter().collect();
    sorted.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
    sorted
}

/// Writes `items` in the order given, then the rules by confidence.
///
/// [`crate::AprioriOutput::items`] already yields items by support.
pub fn write_results<W: Write>(
    out: &mut W,
    items: &[(Itemset, f32)],
    rules: &[AssociationRule],
) -> io::Result<()> {
    for (itemset, support) in items {
        writeln!(out, "item: {} , {:.3}", display_itemset(itemset), support)?;
    }

    writeln!(out, "\n------------------------ RULES:")?;
    for rule in sort_by_confidence(rules) {
        writeln!(out, "Rule: {} , {:.3}", rule, rule.confidence)?;
    }
    Ok(())
}

pub fn write_cache_report<W: Write>(out: &mut W, report: &CacheReport) -> io::Result<()> {
    writeln!(out, "\nResult")?;
    writeln!(
        out,
        "timebefore: {}   timeafter: {}  up: {:.2}",
        report.baseline_time,
        report.cached_time,
        report.improvement()
    )?;
    writeln!(
        out,
        "accesses: {}  rule hits: {}  frequent hits: {}  misses: {}",
        report.accesses,
        report.rule_hits,
        report.frequent_hits,
        report.misses()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(antecedent: Itemset, consequent: Itemset, confidence: f32) -> AssociationRule {
        AssociationRule {
            antecedent,
            consequent,
            confidence,
            lift: 1.0,
        }
    }

    #[test]
    fn test_sort_by_support_is_stable() {
        let mut items = vec![
            (itemset!["B"], 0.75),
            (itemset!["A"], 0.5),
            (itemset!["B", "E"], 0.75),
        ];
        sort_by_support(&mut items);
        assert_eq!(
            items,
            vec![
                (itemset!["A"], 0.5),
                (itemset!["B"], 0.75),
                (itemset!["B", "E"], 0.75),
            ]
        );
    }

    #[test]
    fn test_write_results_keeps_item_order() {
        // items arrive sorted from AprioriOutput::items; rules are sorted here
        let items = vec![
            (itemset!["A"], 0.5),
            (itemset!["B"], 0.75),
            (itemset!["B", "E"], 0.75),
        ];
        let rules = vec![
            rule(itemset!["B"], itemset!["E"], 1.0),
            rule(itemset!["C"], itemset!["A"], 0.6666667),
        ];

        let mut out = Vec::new();
        write_results(&mut out, &items, &rules).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "item: (A) , 0.500\n\
             item: (B) , 0.750\n\
             item: (B, E) , 0.750\n\
             \n------------------------ RULES:\n\
             Rule: (C) ==> (A) , 0.667\n\
             Rule: (B) ==> (E) , 1.000\n"
        );
    }

    #[test]
    fn test_write_cache_report() {
        let report = CacheReport {
            baseline_time: 10.0,
            cached_time: 5.0,
            frequent_hits: 4,
            rule_hits: 1,
            accesses: 5,
        };

        let mut out = Vec::new();
        write_cache_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("timebefore: 10   timeafter: 5  up: 50.00"));
        assert!(text.contains("rule hits: 1  frequent hits: 4  misses: 0"));
    }
}
