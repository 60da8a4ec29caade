use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;

use crate::error::ConsolidateError;

/// Column appended to every row, holding the ticker of its source file.
pub const STOCK_COLUMN: &str = "stock";

/// Column every input file must provide; secondary sort key.
pub const DATE_COLUMN: &str = "date";

/// Sort keys of the combined table, in priority order.
pub const SORT_KEYS: [&str; 2] = [STOCK_COLUMN, DATE_COLUMN];

/// Header rules shared by every input file.
pub struct HeaderSchema;

impl HeaderSchema {
    /// Trim surrounding whitespace and lower-case a header.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Rename every column of `df` to its normalized form.
    ///
    /// Fails when two headers of the same file normalize to one name.
    pub fn normalize(df: &mut DataFrame, path: &Path) -> Result<(), ConsolidateError> {
        let normalized: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| Self::normalize_name(name.as_str()))
            .collect();

        let mut seen = HashSet::with_capacity(normalized.len());
        for name in &normalized {
            if !seen.insert(name.as_str()) {
                return Err(ConsolidateError::DuplicateColumn {
                    path: path.to_path_buf(),
                    column: name.clone(),
                });
            }
        }

        df.set_column_names(normalized.iter().map(|s| s.as_str()))
            .map_err(|source| ConsolidateError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Check that an input table carries the columns the sort relies on.
    pub fn validate_required(df: &DataFrame, path: &Path) -> Result<(), ConsolidateError> {
        if df.schema().contains(DATE_COLUMN) {
            Ok(())
        } else {
            Err(ConsolidateError::MissingColumn {
                path: path.to_path_buf(),
                column: DATE_COLUMN.to_string(),
            })
        }
    }

    /// Column names of a table, in order.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}
