//! File reading utilities

use crate::error::CliError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file fully into memory as UTF-8 text.
    ///
    /// Open and read failures are reported separately so the per-file
    /// error message names the operation that failed.
    pub fn read_text(path: &Path) -> Result<String, CliError> {
        let mut file = File::open(path).map_err(|source| CliError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.starts_with("error opening file /nonexistent/file.txt:"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");

        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let result = FileReader::read_text(&file_path);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.starts_with("error reading file"));
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        fs::write(&file_path, "").unwrap();

        let content = FileReader::read_text(&file_path).unwrap();
        assert_eq!(content, "");
    }
}
