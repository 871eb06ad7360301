use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use deptree::prelude::*;

/// Mock ReportReader for testing
#[derive(Clone)]
pub struct MockReportReader {
    pub content: String,
    pub should_fail: bool,
    /// Paths passed to `read_report`, in call order
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().unwrap().clone()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        self.requested.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock report read failure");
        }
        Ok(self.content.clone())
    }
}
