//! StockMerge Core — consolidate a directory of per-ticker CSV files.
//!
//! The pipeline runs strictly forward, once per run:
//! - locate `*.csv` files in the input directory
//! - load each file, normalize its headers, tag rows with the ticker
//! - concatenate all tables
//! - sort by `(stock, date)`
//! - write the combined CSV

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::{Config, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
pub use error::ConsolidateError;
pub use pipeline::{consolidate, ConsolidationSummary, LoadedFile};
