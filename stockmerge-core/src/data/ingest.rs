use polars::prelude::*;
use std::path::{Path, PathBuf};

use crate::data::locate::CSV_SUFFIX;
use crate::data::schema::{HeaderSchema, STOCK_COLUMN};
use crate::error::ConsolidateError;

/// One input file after loading: normalized headers plus the `stock` column.
#[derive(Debug, Clone)]
pub struct TickerTable {
    pub ticker: String,
    pub path: PathBuf,
    pub frame: DataFrame,
}

impl TickerTable {
    pub fn rows(&self) -> usize {
        self.frame.height()
    }
}

/// Derive the ticker from a file name: the basename with its trailing
/// `.csv` removed, case untouched (`AAPL.csv` → `AAPL`).
pub fn ticker_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(CSV_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Loader for per-ticker CSV files.
pub struct TickerIngestor;

impl TickerIngestor {
    /// Parse a CSV with default rules: comma-delimited, header row,
    /// standard quoting. Column types are inferred from every row, so a
    /// late float or text value widens the column instead of failing.
    pub fn read_csv(path: &Path) -> Result<DataFrame, ConsolidateError> {
        std::fs::metadata(path).map_err(|e| ConsolidateError::io(path, e))?;

        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()
            .and_then(|lf| lf.collect())
            .map_err(|source| ConsolidateError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load one input file: parse it, normalize headers, require `date`,
    /// and tag every row with the file's ticker.
    pub fn load(path: &Path) -> Result<TickerTable, ConsolidateError> {
        let ticker = ticker_from_path(path);
        let mut frame = Self::read_csv(path)?;

        HeaderSchema::normalize(&mut frame, path)?;
        HeaderSchema::validate_required(&frame, path)?;
        attach_ticker(&mut frame, &ticker)?;

        tracing::debug!(
            ticker = %ticker,
            rows = frame.height(),
            columns = frame.width(),
            "loaded input file"
        );

        Ok(TickerTable {
            ticker,
            path: path.to_path_buf(),
            frame,
        })
    }
}

/// Set the `stock` column to `ticker` on every row. An existing `stock`
/// column is overwritten in place; otherwise the column is appended.
pub fn attach_ticker(df: &mut DataFrame, ticker: &str) -> Result<(), ConsolidateError> {
    let stock = Series::new(STOCK_COLUMN.into(), vec![ticker; df.height()]);
    df.with_column(stock)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_strips_csv_suffix() {
        assert_eq!(ticker_from_path(Path::new("/data/AAPL.csv")), "AAPL");
        assert_eq!(ticker_from_path(Path::new("BRK.B.csv")), "BRK.B");
    }

    #[test]
    fn ticker_keeps_case_and_inner_text() {
        assert_eq!(ticker_from_path(Path::new("aapl.csv")), "aapl");
        assert_eq!(ticker_from_path(Path::new("A.csv.csv")), "A.csv");
    }

    #[test]
    fn ticker_without_suffix_is_the_basename() {
        assert_eq!(ticker_from_path(&PathBuf::from("dir/IBM.CSV")), "IBM.CSV");
    }

    #[test]
    fn attach_ticker_appends_constant_column() {
        let mut df = df!("date" => &["2020-01-01", "2020-01-02"]).unwrap();
        attach_ticker(&mut df, "AAPL").unwrap();

        assert_eq!(HeaderSchema::column_names(&df), vec!["date", "stock"]);
        let stock = df.column("stock").unwrap().str().unwrap();
        assert_eq!(stock.get(0), Some("AAPL"));
        assert_eq!(stock.get(1), Some("AAPL"));
    }

    #[test]
    fn attach_ticker_overwrites_existing_stock_column_in_place() {
        let mut df = df!(
            "stock" => &["OLD"],
            "date" => &["2020-01-01"],
        )
        .unwrap();
        attach_ticker(&mut df, "NEW").unwrap();

        assert_eq!(HeaderSchema::column_names(&df), vec!["stock", "date"]);
        let stock = df.column("stock").unwrap().str().unwrap();
        assert_eq!(stock.get(0), Some("NEW"));
    }

    #[test]
    fn attach_ticker_on_empty_table() {
        let mut df = df!("date" => Vec::<&str>::new()).unwrap();
        attach_ticker(&mut df, "AAPL").unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn load_normalizes_and_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MSFT.csv");
        std::fs::write(&path, " Date ,Close\n2020-01-01,200\n2020-01-02,201\n").unwrap();

        let table = TickerIngestor::load(&path).unwrap();

        assert_eq!(table.ticker, "MSFT");
        assert_eq!(table.rows(), 2);
        assert_eq!(
            HeaderSchema::column_names(&table.frame),
            vec!["date", "close", "stock"]
        );
    }

    fn long_history(last_value: &str) -> String {
        let mut csv = String::from("date,volume\n");
        for i in 0..150 {
            csv.push_str(&format!("2020-{:02}-{:02},{}\n", i / 28 + 1, i % 28 + 1, 1000 + i));
        }
        csv.push_str(&format!("2020-12-31,{last_value}\n"));
        csv
    }

    #[test]
    fn late_float_widens_integer_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAPL.csv");
        std::fs::write(&path, long_history("100.5")).unwrap();

        let table = TickerIngestor::load(&path).unwrap();

        assert_eq!(table.rows(), 151);
        let volume = table.frame.column("volume").unwrap();
        assert_eq!(volume.dtype(), &DataType::Float64);
        assert_eq!(volume.f64().unwrap().get(150), Some(100.5));
    }

    #[test]
    fn late_text_turns_column_into_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MSFT.csv");
        std::fs::write(&path, long_history("N/A")).unwrap();

        let table = TickerIngestor::load(&path).unwrap();

        assert_eq!(table.rows(), 151);
        let volume = table.frame.column("volume").unwrap().str().unwrap();
        assert_eq!(volume.get(0), Some("1000"));
        assert_eq!(volume.get(150), Some("N/A"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TickerIngestor::load(Path::new("/nonexistent/AAPL.csv")).unwrap_err();
        assert!(matches!(err, ConsolidateError::Io { .. }));
    }

    #[test]
    fn load_without_date_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAPL.csv");
        std::fs::write(&path, "day,close\n2020-01-01,100\n").unwrap();

        let err = TickerIngestor::load(&path).unwrap_err();
        assert!(matches!(err, ConsolidateError::MissingColumn { .. }));
    }
}
