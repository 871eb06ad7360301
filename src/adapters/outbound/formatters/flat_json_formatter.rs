use crate::application::dto::AnalyzeResponse;
use crate::dependency_tree::domain::{Diagnostic, FlatIndex};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FlatDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration: Option<&'a str>,
    #[serde(flatten)]
    index: &'a FlatIndex,
    by_group: IndexMap<String, IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<&'a [Diagnostic]>,
}

/// FlatJsonFormatter adapter rendering the flat index
///
/// Emits `by_path` (slash-joined identities from a root), `by_identity`
/// (first occurrence wins) and `by_group` (group -> name -> version).
pub struct FlatJsonFormatter;

impl FlatJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlatJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for FlatJsonFormatter {
    fn format(&self, response: &AnalyzeResponse) -> Result<String> {
        let document = FlatDocument {
            configuration: response.configuration.as_deref(),
            index: &response.flat_index,
            by_group: response.flat_index.grouped(),
            diagnostics: response
                .has_diagnostics()
                .then_some(response.diagnostics.as_slice()),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
