//! Error handling for the CLI application

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Per-file and discovery errors reported to the user
#[derive(Debug)]
pub enum CliError {
    /// File could not be opened
    Open {
        /// File the open failed on
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// File contents could not be read
    Read {
        /// File the read failed on
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Formatted text could not be written back
    Write {
        /// File the write failed on
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// File listing failed; fatal to the whole run
    Glob {
        /// Description of the listing failure
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Open { path, source } => {
                write!(f, "error opening file {}: {}", path.display(), source)
            }
            CliError::Read { path, source } => {
                write!(f, "error reading file {}: {}", path.display(), source)
            }
            CliError::Write { path, source } => {
                write!(f, "error writing to file {}: {}", path.display(), source)
            }
            CliError::Glob { message } => {
                write!(f, "error finding .txt files: {message}")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Open { source, .. }
            | CliError::Read { source, .. }
            | CliError::Write { source, .. } => Some(source),
            CliError::Glob { .. } => None,
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
