use crate::dependency_tree::services::ParseOptions;
use std::path::PathBuf;

/// AnalyzeRequest - Internal request DTO for the report analysis use case
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Path to the saved `gradle dependencies` output
    pub report_path: PathBuf,
    /// Configuration section to extract; the whole report is parsed when absent
    pub configuration: Option<String>,
    pub parse_options: ParseOptions,
}

impl AnalyzeRequest {
    pub fn new(
        report_path: PathBuf,
        configuration: Option<String>,
        parse_options: ParseOptions,
    ) -> Self {
        Self {
            report_path,
            configuration,
            parse_options,
        }
    }
}
