//! Run configuration.
//!
//! Every field has a default, so a run without a config file reads the
//! fixed input directory and writes the fixed output file. A TOML file may
//! override any subset of the fields.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConsolidateError;

/// Directory scanned for `*.csv` inputs when nothing else is configured.
pub const DEFAULT_INPUT_DIR: &str = "/Users/darren/Downloads/stock_data/stocks";

/// Combined file written when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "/Users/darren/Downloads/stock_data/combined_stock_data.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one `<TICKER>.csv` per symbol.
    pub input_dir: PathBuf,

    /// Destination of the combined CSV. Overwritten on every run.
    pub output_path: PathBuf,

    /// Require every input file to carry exactly the first file's columns.
    /// When false, columns are unioned and absent cells are left empty.
    pub strict_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strict_schema: false,
        }
    }
}

impl Config {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConsolidateError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConsolidateError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConsolidateError> {
        toml::from_str(content).map_err(|e| ConsolidateError::Config(format!("parse TOML: {e}")))
    }

    /// Config pointing at explicit input and output locations.
    pub fn with_paths(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}
