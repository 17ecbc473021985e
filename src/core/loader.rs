//! Loader - reads delimited text sources into typed records
//!
//! Every source has one header row, skipped without inspection, followed by
//! comma-separated data rows. A malformed row fails the whole source; there is
//! no partial recovery.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::Sources;
use crate::core::engine::{compute_report, EfficiencyReport};
use crate::core::entity::{Record, Row};
use crate::entities::{Mechanic, RepairJob, RepairType};

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Cannot read {}", .path.display())]
    #[diagnostic(
        code(shopeff::load::io),
        help("check the path, or point to the file with --jobs, --types or --mechanics")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {kind} data in {origin}")]
    #[diagnostic(code(shopeff::load::csv))]
    Csv {
        kind: &'static str,
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin}:{line}: {kind} row has {found} column(s), missing `{column}` (expected {expected})")]
    #[diagnostic(code(shopeff::load::missing_column))]
    MissingColumn {
        kind: &'static str,
        origin: String,
        line: u64,
        column: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{origin}:{line}: {kind} column `{column}` is not an integer: {value:?}")]
    #[diagnostic(
        code(shopeff::load::invalid_integer),
        help("numeric columns hold whole numbers; only actual_time and mechanic_id accept NULL")
    )]
    InvalidInteger {
        kind: &'static str,
        origin: String,
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Read records of one kind from any byte source.
///
/// `origin` names the source in diagnostics. Records come back in row order.
pub fn load_reader<T: Record, R: Read>(reader: R, origin: &str) -> Result<Vec<T>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let fields = result.map_err(|source| LoadError::Csv {
            kind: T::KIND,
            origin: origin.to_string(),
            source,
        })?;
        let line = fields.position().map(|p| p.line()).unwrap_or_default();
        let row = Row::new::<T>(origin, line, &fields);
        records.push(T::from_row(&row)?);
    }

    debug!(kind = T::KIND, origin, rows = records.len(), "loaded source");
    Ok(records)
}

/// Read records of one kind from a file
pub fn load_file<T: Record>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file, &path.display().to_string())
}

/// The three record collections, loaded once and never mutated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub jobs: Vec<RepairJob>,
    pub types: Vec<RepairType>,
    pub mechanics: Vec<Mechanic>,
}

impl Dataset {
    /// Load all three sources, failing on the first one that is malformed
    pub fn load(sources: &Sources) -> Result<Self, LoadError> {
        let mechanics = load_file::<Mechanic>(&sources.mechanics)?;
        let jobs = load_file::<RepairJob>(&sources.jobs)?;
        let types = load_file::<RepairType>(&sources.types)?;

        info!(
            jobs = jobs.len(),
            types = types.len(),
            mechanics = mechanics.len(),
            "dataset loaded"
        );

        Ok(Self {
            jobs,
            types,
            mechanics,
        })
    }

    pub fn report(&self) -> EfficiencyReport {
        compute_report(&self.jobs, &self.types, &self.mechanics)
    }
}
