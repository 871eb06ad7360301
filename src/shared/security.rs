use crate::shared::error::DeptreeError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest dependency report we are willing to load (100 MB).
/// Multi-module Gradle builds print large reports, but never this large.
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` names an existing regular file that is not a symlink
/// and is no larger than `max_size`.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
///
/// # Errors
/// Returns [`DeptreeError::ReportNotFound`] when the path does not exist and
/// [`DeptreeError::InvalidInputPath`] for symlinks, directories and oversized files.
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DeptreeError::ReportNotFound {
                path: path.to_path_buf(),
                suggestion: "Save the output of `./gradlew dependencies` to a file and pass it with --input.".to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(DeptreeError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: format!("Failed to read file metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(DeptreeError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DeptreeError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Rejects an output target that already exists as a symbolic link.
///
/// A missing target is fine; it will be created by the writer.
pub fn validate_output_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(DeptreeError::FileWriteError {
            path: path.to_path_buf(),
            details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(DeptreeError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DeptreeError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: format!(
                "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
        }
        .into());
    }
    Ok(())
}
