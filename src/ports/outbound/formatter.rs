use crate::application::dto::AnalyzeResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering an analyzed report
///
/// This port abstracts the output shape (nested JSON, flat JSON,
/// regenerated tree text).
pub trait ReportFormatter {
    /// Renders `response` into the final output text
    ///
    /// # Errors
    /// Returns an error if serialization fails or the tree cannot be walked
    fn format(&self, response: &AnalyzeResponse) -> Result<String>;
}
