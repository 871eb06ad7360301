use crate::ports::outbound::ReportReader;
use crate::shared::error::DeptreeError;
use crate::shared::security::{validate_input_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading dependency reports from the file system
///
/// This adapter implements the ReportReader port. Every read goes through
/// the input checks in [`crate::shared::security`] first.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_REPORT_SIZE,
        }
    }

    /// Reader with a custom size cap
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        validate_input_file(path, self.max_size)?;

        fs::read_to_string(path).map_err(|e| {
            DeptreeError::ReportReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("deps.txt");
        fs::write(&report_path, "+--- a:b:1.0\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_report(&report_path).unwrap();

        assert_eq!(content, "+--- a:b:1.0\n");
    }

    #[test]
    fn test_read_report_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&temp_dir.path().join("missing.txt"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Dependency report not found"));
    }

    #[test]
    fn test_read_report_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().read_report(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Not a regular file"));
    }

    #[test]
    fn test_read_report_over_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("deps.txt");
        fs::write(&report_path, "+--- a:b:1.0\n").unwrap();

        let result = FileSystemReader::with_max_size(4).read_report(&report_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("too large"));
    }

    #[test]
    fn test_read_report_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("deps.txt");
        fs::write(&report_path, [0xff, 0xfe, 0x00]).unwrap();

        let result = FileSystemReader::new().read_report(&report_path);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read dependency report"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_report_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("deps.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "+--- a:b:1.0\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_report(&link);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }
}
