//! End-to-end consolidation run.
//!
//! Every input is loaded and the combined table sorted before the output
//! file is opened, so any failure leaves an existing output untouched.

use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::data::{
    locate_csv_files, write_combined_csv, Canonicalizer, HeaderSchema, SchemaPolicy,
    TickerIngestor,
};
use crate::error::ConsolidateError;

/// Provenance of one input file in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedFile {
    pub ticker: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidationSummary {
    pub files: Vec<LoadedFile>,
    pub rows: usize,
    pub columns: Vec<String>,
    pub output: PathBuf,
}

/// Run the whole pipeline for `config`.
///
/// An empty or missing input directory is not an error: the output file is
/// written empty (no header, no rows).
pub fn consolidate(config: &Config) -> Result<ConsolidationSummary, ConsolidateError> {
    let paths = locate_csv_files(&config.input_dir)?;
    tracing::info!(
        dir = %config.input_dir.display(),
        files = paths.len(),
        "located input files"
    );

    let mut tables = Vec::with_capacity(paths.len());
    for path in &paths {
        let table = TickerIngestor::load(path)?;
        tracing::info!(ticker = %table.ticker, rows = table.rows(), "loaded");
        tables.push(table);
    }

    let policy = if config.strict_schema {
        SchemaPolicy::Strict
    } else {
        SchemaPolicy::Union
    };
    let combined = Canonicalizer::combine(&tables, policy)?;
    let mut sorted = Canonicalizer::sort(combined)?;

    write_combined_csv(&mut sorted, &config.output_path)?;

    let summary = ConsolidationSummary {
        files: tables
            .iter()
            .map(|t| LoadedFile {
                ticker: t.ticker.clone(),
                path: t.path.clone(),
                rows: t.rows(),
            })
            .collect(),
        rows: sorted.height(),
        columns: HeaderSchema::column_names(&sorted),
        output: config.output_path.clone(),
    };

    tracing::info!(
        output = %summary.output.display(),
        rows = summary.rows,
        files = summary.files.len(),
        "wrote combined CSV"
    );

    Ok(summary)
}
