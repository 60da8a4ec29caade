//! Per-ticker CSV ingestion, combination and export

pub mod canonicalize;
pub mod export;
pub mod ingest;
pub mod locate;
pub mod schema;

pub use canonicalize::{Canonicalizer, SchemaPolicy};
pub use export::{export_csv_string, write_combined_csv};
pub use ingest::{ticker_from_path, TickerIngestor, TickerTable};
pub use locate::locate_csv_files;
pub use schema::{HeaderSchema, DATE_COLUMN, SORT_KEYS, STOCK_COLUMN};
