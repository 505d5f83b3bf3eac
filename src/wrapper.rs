use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::AprioriError;
use crate::types::{Item, RawTransaction};
use crate::{run, run_apriori, AprioriConfig, MemorySource};

type PyItemset = Vec<Item>;
type PyRule = (PyItemset, PyItemset, f32);

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> PyErr {
        match err {
            AprioriError::Io { .. } => PyIOError::new_err(err.to_string()),
            AprioriError::SupportNotFound(_) => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn to_config(min_support: f32, min_confidence: f32, unit_cost: f64) -> PyResult<AprioriConfig> {
    let config = AprioriConfig {
        min_support,
        min_confidence,
        unit_cost,
        ..AprioriConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Apriori algorithm for association rules.
///
/// Returns `(items, rules)` where items are `(itemset, support)` pairs and
/// rules are `(antecedent, consequent, confidence)` triples.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, min_confidence, /)")]
fn mine(
    transactions: Vec<RawTransaction>,
    min_support: f32,
    min_confidence: f32,
) -> PyResult<(Vec<(PyItemset, f32)>, Vec<PyRule>)> {
    let config = to_config(min_support, min_confidence, crate::config::DEFAULT_UNIT_COST)?;
    let output = run_apriori(&MemorySource::new(transactions), &config)?;

    let items = output
        .items()?
        .into_iter()
        .map(|(itemset, support)| (itemset.into_iter().collect(), support))
        .collect();
    let rules = output
        .sorted_rules()
        .into_iter()
        .map(|rule| {
            (
                rule.antecedent.iter().cloned().collect(),
                rule.consequent.iter().cloned().collect(),
                rule.confidence,
            )
        })
        .collect();
    Ok((items, rules))
}

/// Mines `transactions`, replays them through the cache model and returns
/// `(timebefore, timeafter, frequent_hits, rule_hits)`.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, min_confidence, unit_cost, /)")]
fn cache_benefit(
    transactions: Vec<RawTransaction>,
    min_support: f32,
    min_confidence: f32,
    unit_cost: f64,
) -> PyResult<(f64, f64, u64, u64)> {
    let config = to_config(min_support, min_confidence, unit_cost)?;
    let (_, report) = run(&MemorySource::new(transactions), &config)?;
    Ok((
        report.baseline_time,
        report.cached_time,
        report.frequent_hits,
        report.rule_hits,
    ))
}

#[pymodule]
fn apriori(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine, m)?)?;
    m.add_function(wrap_pyfunction!(cache_benefit, m)?)?;
    Ok(())
}
