//! Error taxonomy for a consolidation run.
//!
//! Every variant is fatal: the pipeline stops at the first error and the
//! output file is only touched once all inputs have loaded and sorted.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsolidateError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("column '{column}' appears more than once in {} after header normalization", path.display())]
    DuplicateColumn { path: PathBuf, column: String },

    #[error("missing required column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("missing sort key column '{0}' in combined table")]
    MissingSortKey(String),

    #[error(
        "schema mismatch in {}: expected columns [{}], found [{}]",
        path.display(),
        expected.join(", "),
        actual.join(", ")
    )]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("frame operation failed: {0}")]
    Frame(#[from] PolarsError),

    #[error("config error: {0}")]
    Config(String),
}

impl ConsolidateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
