//! CSV writer for the combined table.
//!
//! Output is comma-delimited UTF-8 with a header row and no index column.
//! Nulls are written as empty fields. The destination is truncated and
//! rewritten in place; a failure part-way can leave a partial file.

use polars::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ConsolidateError;

/// Serialize `df` to any writer. A frame without columns produces no bytes.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> Result<(), ConsolidateError> {
    if df.width() == 0 {
        return Ok(());
    }

    CsvWriter::new(writer)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    Ok(())
}

/// Write the combined table to `path`, replacing any existing file.
/// The parent directory must already exist.
pub fn write_combined_csv(df: &mut DataFrame, path: &Path) -> Result<(), ConsolidateError> {
    let file = File::create(path).map_err(|e| ConsolidateError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_csv(df, &mut writer)?;
    writer.flush().map_err(|e| ConsolidateError::io(path, e))
}

/// Render the combined table as an in-memory CSV string.
pub fn export_csv_string(df: &mut DataFrame) -> Result<String, ConsolidateError> {
    let mut buf = Vec::new();
    write_csv(df, &mut buf)?;
    String::from_utf8(buf).map_err(|e| {
        ConsolidateError::io(
            "<memory>",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}
