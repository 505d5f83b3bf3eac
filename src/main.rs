use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use apriori::{
    report::{write_cache_report, write_results},
    run_apriori, run_cache, AprioriConfig, CsvFile, JoinStrategy, MemorySource, TransactionSource,
};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "apriori")]
#[command(about = "Mine frequent itemsets and association rules, then estimate cache savings")]
struct Args {
    /// File containing comma separated transactions, one per line (stdin if omitted)
    #[arg(short = 'f', long = "input-file")]
    input: Option<PathBuf>,

    /// Minimum support value
    #[arg(short = 's', long, default_value_t = apriori::config::DEFAULT_MIN_SUPPORT)]
    min_support: f32,

    /// Minimum confidence value
    #[arg(short = 'c', long, default_value_t = apriori::config::DEFAULT_MIN_CONFIDENCE)]
    min_confidence: f32,

    /// Cost of an uncached access
    #[arg(short = 't', long, default_value_t = apriori::config::DEFAULT_UNIT_COST)]
    unit_cost: f64,

    /// Largest itemset size to explore
    #[arg(long)]
    max_len: Option<usize>,

    /// Skip candidates that have an infrequent subset
    #[arg(long)]
    closure_pruning: bool,

    /// Logging level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .init();

    let config = AprioriConfig {
        min_support: args.min_support,
        min_confidence: args.min_confidence,
        unit_cost: args.unit_cost,
        max_len: args.max_len,
        join: if args.closure_pruning {
            JoinStrategy::ClosurePruned
        } else {
            JoinStrategy::Pairwise
        },
    };
    config.validate()?;

    let source: Box<dyn TransactionSource> = match &args.input {
        Some(path) => Box::new(CsvFile::new(path)),
        None => {
            info!("reading transactions from stdin");
            let stdin = io::stdin();
            Box::new(MemorySource::from_reader(stdin.lock(), "<stdin>")?)
        }
    };

    let output = run_apriori(source.as_ref(), &config).context("mining failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, &output.items()?, &output.rules.rules)?;

    let report = run_cache(source.as_ref(), &output, config.unit_cost)
        .context("cache replay failed")?;
    write_cache_report(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
