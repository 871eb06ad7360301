use super::traversal::{Step, TreeWalker};
use crate::dependency_tree::domain::{ParsedTree, TreeError};

/// One indentation unit of regenerated output
pub const INDENT_UNIT: &str = "|   ";

/// Entry marker of regenerated output; `\---` is never written
pub const ENTRY_PREFIX: &str = "+--- ";

const REFERENCE_SUFFIX: &str = " (*)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Re-emit the original report line wherever one was kept
    pub lossless: bool,
}

/// TreeSerializer service - writes a [`ParsedTree`] back in report notation.
///
/// Children are emitted in insertion order. A reference is written as a
/// single `(*)` line and its subtree is never repeated, matching how the
/// report elides repeated subtrees.
pub struct TreeSerializer {
    options: SerializeOptions,
}

impl TreeSerializer {
    pub fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    pub fn serialize(&self, tree: &ParsedTree) -> Result<Vec<String>, TreeError> {
        let mut lines = Vec::with_capacity(tree.len());
        TreeWalker::new(tree).walk(|step| lines.push(self.render(step)))?;
        Ok(lines)
    }

    /// Same as [`serialize`](Self::serialize), joined with `\n`
    pub fn serialize_to_string(&self, tree: &ParsedTree) -> Result<String, TreeError> {
        Ok(self.serialize(tree)?.join("\n"))
    }

    fn render(&self, step: &Step<'_>) -> String {
        if self.options.lossless {
            if let Some(line) = step.source_line() {
                return line.to_string();
            }
        }

        let coordinate = step.coordinate();
        let payload = if step.is_reference() && !coordinate.is_reference() {
            format!("{}{}", coordinate.entry_text(), REFERENCE_SUFFIX)
        } else {
            coordinate.entry_text()
        };
        format!("{}{}{}", INDENT_UNIT.repeat(step.depth), ENTRY_PREFIX, payload)
    }
}
