//! Record sources that can be read more than once.
//!
//! A full run walks the records twice: once to mine, once to replay the
//! stream through the cache simulation. Each call to
//! [`TransactionSource::records`] starts a fresh pass.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{AprioriError, Result};
use crate::types::RawTransaction;

pub type Records<'a> = Box<dyn Iterator<Item = Result<RawTransaction>> + 'a>;

pub trait TransactionSource {
    /// Opens a new pass over the records, from the first one.
    fn records(&self) -> Result<Records<'_>>;
}

/// Splits one line of comma separated items.
///
/// Surrounding whitespace and trailing separators are stripped; a blank line
/// gives an empty record.
pub fn parse_record(line: &str) -> RawTransaction {
    let line = line.trim().trim_end_matches(',');
    if line.is_empty() {
        return vec![];
    }
    line.split(',').map(String::from).collect()
}

/// A delimited text file, reopened on every pass.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> AprioriError {
        AprioriError::Io {
            origin: self.path.display().to_string(),
            source,
        }
    }
}

impl TransactionSource for CsvFile {
    fn records(&self) -> Result<Records<'_>> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let lines = BufReader::new(file).lines();
        Ok(Box::new(lines.map(move |line| {
            line.map(|line| parse_record(&line))
                .map_err(|e| self.io_error(e))
        })))
    }
}

/// Records held in memory and replayed on every pass.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawTransaction>,
}

impl MemorySource {
    pub fn new(records: Vec<RawTransaction>) -> Self {
        Self { records }
    }

    /// Drains a one-shot reader (stdin, a socket) so it can be walked twice.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let records = reader
            .lines()
            .map(|line| {
                line.map(|line| parse_record(&line))
                    .map_err(|source| AprioriError::Io {
                        origin: origin.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TransactionSource for MemorySource {
    fn records(&self) -> Result<Records<'_>> {
        Ok(Box::new(self.records.iter().cloned().map(Ok)))
    }
}
