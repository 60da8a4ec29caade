//! Input discovery: the `*.csv` entries of a single directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConsolidateError;

/// File name suffix that marks an input file. Matched case-sensitively.
pub const CSV_SUFFIX: &str = ".csv";

/// List the entries of `dir` that match `*.csv`.
///
/// Follows shell glob rules: the match is case-sensitive and a leading `.`
/// is never matched by `*`, so hidden files are skipped. Entries are not
/// checked for being regular files; a directory named `x.csv` fails later
/// when it is read. A missing directory yields no files. The result is
/// sorted by path.
pub fn locate_csv_files(dir: &Path) -> Result<Vec<PathBuf>, ConsolidateError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "input directory does not exist");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ConsolidateError::io(dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConsolidateError::io(dir, e))?;
        let path = entry.path();

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };

        if matches_csv_glob(&name) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Whether a bare file name matches `*.csv`.
pub fn matches_csv_glob(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX) && !name.starts_with('.')
}
