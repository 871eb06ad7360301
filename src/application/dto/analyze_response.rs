use crate::dependency_tree::domain::{Diagnostic, FlatIndex, ParsedTree, TreeStats};

/// AnalyzeResponse - Internal response DTO from the report analysis use case
///
/// Carries the rich structures produced by the core so formatters can
/// render whichever shape was requested.
#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub tree: ParsedTree,
    pub flat_index: FlatIndex,
    /// Lines that were skipped, in report order
    pub diagnostics: Vec<Diagnostic>,
    pub stats: TreeStats,
    /// Name of the extracted configuration section, if one was requested
    pub configuration: Option<String>,
}

impl AnalyzeResponse {
    pub fn new(
        tree: ParsedTree,
        flat_index: FlatIndex,
        diagnostics: Vec<Diagnostic>,
        configuration: Option<String>,
    ) -> Self {
        let stats = tree.stats();
        Self {
            tree,
            flat_index,
            diagnostics,
            stats,
            configuration,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
