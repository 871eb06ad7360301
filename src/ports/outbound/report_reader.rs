use crate::shared::Result;
use std::path::Path;

/// ReportReader port for loading a saved dependency report
///
/// This port abstracts the file system operations needed to read
/// the text output of `gradle dependencies`.
pub trait ReportReader {
    /// Reads the whole report at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist
    /// - The path is a symbolic link, a directory or exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, path: &Path) -> Result<String>;
}
