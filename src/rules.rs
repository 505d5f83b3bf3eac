pub mod rule;
pub mod search;

pub use rule::AssociationRule;
pub use search::{generate_rules, RuleSet};
