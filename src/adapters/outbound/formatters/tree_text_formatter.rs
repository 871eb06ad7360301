use crate::application::dto::AnalyzeResponse;
use crate::dependency_tree::services::{SerializeOptions, TreeSerializer};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TreeTextFormatter adapter regenerating the report notation
///
/// In lossless mode every entry is re-emitted exactly as it was read.
/// Otherwise output uses canonical `|   ` indentation and `+--- ` markers.
pub struct TreeTextFormatter {
    serializer: TreeSerializer,
}

impl TreeTextFormatter {
    pub fn new(lossless: bool) -> Self {
        Self {
            serializer: TreeSerializer::new(SerializeOptions { lossless }),
        }
    }
}

impl Default for TreeTextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for TreeTextFormatter {
    fn format(&self, response: &AnalyzeResponse) -> Result<String> {
        let mut output = String::new();
        for line in self.serializer.serialize(&response.tree)? {
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }
}
