use std::fmt::{Display, Formatter};

use crate::error::Result;
use crate::types::{display_itemset, Itemset};

#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f32,
    pub lift: f32,
}

impl AssociationRule {
    /// Splits `combi` into `antecedent => combi - antecedent`.
    pub fn from_split(combi: &Itemset, antecedent: Itemset) -> Self {
        let consequent = combi.difference(&antecedent).cloned().collect();
        Self {
            antecedent,
            consequent,
            confidence: 0.0,
            lift: 0.0,
        }
    }

    pub fn union(&self) -> Itemset {
        self.antecedent.union(&self.consequent).cloned().collect()
    }

    /// Fills in confidence and lift from raw support counts over `N`
    /// transactions.
    ///
    /// Returns `false` when the antecedent never occurs, leaving the
    /// confidence undefined.
    #[allow(non_snake_case)]
    pub fn compute_confidence<F>(&mut self, count: &F, N: usize) -> Result<bool>
    where
        F: Fn(&Itemset) -> Result<u32>,
    {
        let antecedent_support_count = count(&self.antecedent)? as f32;
        if antecedent_support_count <= 0.0 {
            return Ok(false);
        }
        let consequent_support_count = count(&self.consequent)? as f32;
        let union_support_count = count(&self.union())? as f32;

        self.confidence = union_support_count / antecedent_support_count;
        self.lift = if consequent_support_count > 0.0 {
            union_support_count / (antecedent_support_count * consequent_support_count) * N as f32
        } else {
            0.0
        };
        Ok(true)
    }
}

impl Display for AssociationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ==> {}",
            display_itemset(&self.antecedent),
            display_itemset(&self.consequent)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::AprioriError;
    use maplit::hashmap;

    #[test]
    fn test_from_split() {
        let rule = AssociationRule::from_split(&itemset!["A", "B", "C"], itemset!["B"]);
        assert_eq!(rule.antecedent, itemset!["B"]);
        assert_eq!(rule.consequent, itemset!["A", "C"]);
        assert_eq!(rule.union(), itemset!["A", "B", "C"]);
    }

    #[test]
    fn test_compute_confidence() {
        let counts = hashmap! {
            itemset!["B"] => 3,
            itemset!["E"] => 3,
            itemset!["B", "E"] => 3,
        };
        let count = |itemset: &Itemset| -> Result<u32> { Ok(counts[itemset]) };

        let mut rule = AssociationRule::from_split(&itemset!["B", "E"], itemset!["B"]);
        assert!(rule.compute_confidence(&count, 4).unwrap());
        assert_eq!(rule.confidence, 1.0);
        assert!((rule.lift - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_compute_confidence_exact_ratio() {
        // 3 of 5 antecedent transactions also hold the consequent
        let counts = hashmap! {
            itemset!["X"] => 5,
            itemset!["Y"] => 3,
            itemset!["X", "Y"] => 3,
        };
        let count = |itemset: &Itemset| -> Result<u32> { Ok(counts[itemset]) };

        let mut rule = AssociationRule::from_split(&itemset!["X", "Y"], itemset!["X"]);
        assert!(rule.compute_confidence(&count, 7).unwrap());
        assert!(rule.confidence >= 0.6);
        assert_eq!(rule.confidence, 0.6);
    }

    #[test]
    fn test_compute_confidence_zero_antecedent() {
        let count = |_: &Itemset| -> Result<u32> { Ok(0) };
        let mut rule = AssociationRule::from_split(&itemset!["A", "B"], itemset!["A"]);
        assert!(!rule.compute_confidence(&count, 4).unwrap());
    }

    #[test]
    fn test_compute_confidence_missing_support() {
        let count = |itemset: &Itemset| -> Result<u32> {
            Err(AprioriError::SupportNotFound(itemset.iter().cloned().collect()))
        };
        let mut rule = AssociationRule::from_split(&itemset!["A", "B"], itemset!["A"]);
        assert!(matches!(
            rule.compute_confidence(&count, 4),
            Err(AprioriError::SupportNotFound(_))
        ));
    }

    #[test]
    fn test_display() {
        let rule = AssociationRule::from_split(
            &itemset!["beer", "diaper", "milk"],
            itemset!["diaper", "beer"],
        );
        assert_eq!(rule.to_string(), "(beer, diaper) ==> (milk)");
    }
}
