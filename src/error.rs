use thiserror::Error;

use crate::types::Item;

#[derive(Debug, Error)]
pub enum AprioriError {
    #[error("failed to read transactions from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("support of itemset {0:?} was never evaluated")]
    SupportNotFound(Vec<Item>),

    #[error("{name} must lie in (0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("unit cost must be a positive number, got {0}")]
    InvalidUnitCost(f64),

    #[error("max_len must be at least 1")]
    InvalidMaxLen,
}

pub type Result<T> = std::result::Result<T, AprioriError>;
