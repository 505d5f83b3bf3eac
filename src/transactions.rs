use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::types::{Itemset, ItemsetLevel, RawTransaction, Transaction};

/// Materializes the transaction list and the 1-itemset candidates.
///
/// Duplicate items inside a record collapse. Empty records contribute
/// nothing to either output. The first read error aborts the pass.
pub fn index_transactions<I>(records: I) -> Result<(ItemsetLevel, Vec<Transaction>)>
where
    I: IntoIterator<Item = Result<RawTransaction>>,
{
    let mut item_set: ItemsetLevel = BTreeSet::new();
    let mut transactions: Vec<Transaction> = Vec::new();

    for record in records {
        let transaction: Transaction = record?.into_iter().collect();
        if transaction.is_empty() {
            continue;
        }

        for item in &transaction {
            item_set.insert(Itemset::from([item.clone()]));
        }
        transactions.push(transaction);
    }

    debug!(
        transactions = transactions.len(),
        unique_items = item_set.len(),
        "indexed transactions"
    );

    Ok((item_set, transactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AprioriError;

    fn ok_records(records: Vec<Vec<&str>>) -> Vec<Result<RawTransaction>> {
        records
            .into_iter()
            .map(|record| Ok(record.into_iter().map(String::from).collect()))
            .collect()
    }

    #[test]
    fn test_one_itemsets_and_transactions() {
        let records = ok_records(vec![vec!["A", "C", "D"], vec!["B", "C", "E"]]);
        let (item_set, transactions) = index_transactions(records).unwrap();

        let expected: ItemsetLevel = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|&item| itemset![item])
            .collect();
        assert_eq!(item_set, expected);
        assert_eq!(
            transactions,
            vec![itemset!["A", "C", "D"], itemset!["B", "C", "E"]]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let records = ok_records(vec![vec!["milk", "bread", "milk"]]);
        let (item_set, transactions) = index_transactions(records).unwrap();

        assert_eq!(item_set.len(), 2);
        assert_eq!(transactions, vec![itemset!["bread", "milk"]]);
    }

    #[test]
    fn test_empty_records_are_skipped() {
        let records = ok_records(vec![vec![], vec!["A"], vec![]]);
        let (item_set, transactions) = index_transactions(records).unwrap();

        assert_eq!(item_set.len(), 1);
        assert_eq!(transactions, vec![itemset!["A"]]);
    }

    #[test]
    fn test_read_error_propagates() {
        let records: Vec<Result<RawTransaction>> = vec![
            Ok(vec!["A".to_string()]),
            Err(AprioriError::Io {
                origin: "<test>".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad line"),
            }),
        ];
        assert!(matches!(
            index_transactions(records),
            Err(AprioriError::Io { .. })
        ));
    }
}
