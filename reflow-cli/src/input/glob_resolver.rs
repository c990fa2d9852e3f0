//! File discovery using glob

use crate::error::CliError;
use glob::glob;
use std::path::PathBuf;

/// Pattern used to discover input files in the working directory.
pub const TXT_PATTERN: &str = "*.txt";

/// List `.txt` files in the current working directory, non-recursive.
///
/// Returns the matching files sorted by name. An empty result is not an
/// error; the caller decides how to report it. A listing failure is fatal
/// to the run, so it surfaces as [`CliError::Glob`].
pub fn discover_txt_files() -> Result<Vec<PathBuf>, CliError> {
    let paths = glob(TXT_PATTERN).map_err(|source| CliError::Glob {
        message: source.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|source| CliError::Glob {
            message: source.to_string(),
        })?;

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();

    Ok(files)
}
