use polars::prelude::*;

use crate::data::ingest::TickerTable;
use crate::data::schema::{HeaderSchema, SORT_KEYS};
use crate::error::ConsolidateError;

/// How the aggregator reconciles columns across input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPolicy {
    /// Union of all columns; cells absent from a file's rows become null.
    Union,
    /// Every table must have exactly the first table's column set.
    Strict,
}

/// Combines and orders per-ticker tables.
pub struct Canonicalizer;

impl Canonicalizer {
    /// Concatenate tables row-wise in the given order.
    ///
    /// Columns appear in first-seen order. Same-named columns with different
    /// inferred types are widened to a common supertype. No rows are
    /// deduplicated. An empty input yields an empty frame with no columns.
    pub fn combine(
        tables: &[TickerTable],
        policy: SchemaPolicy,
    ) -> Result<DataFrame, ConsolidateError> {
        if tables.is_empty() {
            return Ok(DataFrame::empty());
        }

        if policy == SchemaPolicy::Strict {
            Self::check_same_columns(tables)?;
        }

        let frames: Vec<LazyFrame> = tables.iter().map(|t| t.frame.clone().lazy()).collect();
        let combined = concat_lf_diagonal(
            frames,
            UnionArgs {
                parallel: false,
                rechunk: true,
                to_supertypes: true,
                ..Default::default()
            },
        )?
        .collect()?;

        Ok(combined)
    }

    /// Sort ascending by `stock`, then `date`. Stable: rows with equal keys
    /// keep their concatenation order. Nulls sort last.
    pub fn sort(df: DataFrame) -> Result<DataFrame, ConsolidateError> {
        if df.width() == 0 {
            return Ok(df);
        }

        for key in SORT_KEYS {
            if !df.schema().contains(key) {
                return Err(ConsolidateError::MissingSortKey(key.to_string()));
            }
        }

        let sorted = df
            .lazy()
            .sort(
                SORT_KEYS,
                SortMultipleOptions::default()
                    .with_order_descending_multi([false, false])
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        Ok(sorted)
    }

    fn check_same_columns(tables: &[TickerTable]) -> Result<(), ConsolidateError> {
        let mut expected = HeaderSchema::column_names(&tables[0].frame);
        expected.sort();

        for table in &tables[1..] {
            let mut actual = HeaderSchema::column_names(&table.frame);
            actual.sort();
            if actual != expected {
                return Err(ConsolidateError::SchemaMismatch {
                    path: table.path.clone(),
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}
