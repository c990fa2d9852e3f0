//! In-place file overwrite

use crate::error::CliError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes formatted text back over the original file
pub struct FileWriter;

impl FileWriter {
    /// Overwrite `path` with `text`, creating it with mode `rw-r--r--`.
    ///
    /// The overwrite is direct: there is no temp-file-and-rename step, so a
    /// failed write can leave the file truncated. The caller reports the
    /// failure and moves on to the next file.
    pub fn write_text(path: &Path, text: &str) -> Result<(), CliError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(path).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(text.as_bytes())
            .map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }
}
