use crate::application::dto::AnalyzeResponse;
use crate::dependency_tree::domain::{Diagnostic, NestedMap, TreeStats};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NestedDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<&'a str>,
    stats: &'a TreeStats,
    dependencies: NestedMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<&'a [Diagnostic]>,
}

/// NestedJsonFormatter adapter rendering the tree as nested JSON objects
///
/// Each key is the full coordinate of a child. References carry
/// `"reference": true` and are not expanded.
pub struct NestedJsonFormatter {
    include_original: bool,
}

impl NestedJsonFormatter {
    /// `include_original` adds each entry's report line as `original`
    pub fn new(include_original: bool) -> Self {
        Self { include_original }
    }
}

impl Default for NestedJsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for NestedJsonFormatter {
    fn format(&self, response: &AnalyzeResponse) -> Result<String> {
        let document = NestedDocument {
            configuration: response.configuration.as_deref(),
            stats: &response.stats,
            dependencies: response.tree.to_nested_map(self.include_original),
            diagnostics: response
                .has_diagnostics()
                .then_some(response.diagnostics.as_slice()),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
