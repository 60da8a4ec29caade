//! StockMerge CLI — combine a directory of per-ticker CSV files into one.
//!
//! With no arguments, reads `*.csv` from the fixed input directory and
//! writes the combined file to the fixed output path. A TOML config file
//! may override either path and enable strict schema checking.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stockmerge_core::{consolidate, Config, ConsolidationSummary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stockmerge",
    about = "Combine per-ticker CSV files into one sorted CSV"
)]
struct Cli {
    /// Path to a TOML config file (input_dir, output_path, strict_schema).
    /// Paths given there replace the fixed default input and output paths.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the run summary as JSON instead of plain text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let summary = consolidate(&config).with_context(|| {
        format!(
            "failed to consolidate {} into {}",
            config.input_dir.display(),
            config.output_path.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &ConsolidationSummary) {
    println!(
        "Combined {} rows from {} files into {}",
        summary.rows,
        summary.files.len(),
        summary.output.display()
    );
    if !summary.columns.is_empty() {
        println!("Columns: {}", summary.columns.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["stockmerge"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.json);
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["stockmerge", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn config_help_mentions_path_override() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("replace the fixed default input and output paths"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["stockmerge", "/some/dir"]).is_err());
    }

    #[test]
    fn summary_serializes_to_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AAPL.csv"), "date,close\n2020-01-01,1\n").unwrap();
        let config = Config::with_paths(dir.path(), dir.path().join("combined.out"));

        let summary = consolidate(&config).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["rows"], 1);
        assert_eq!(json["files"][0]["ticker"], "AAPL");
    }
}
