use super::entry_line::{parse_entry_line, IndentStrategy};
use super::tree_flattener::{FlattenOptions, TreeFlattener};
use crate::dependency_tree::domain::{
    Child, Diagnostic, FlatIndex, NodeId, ParsedTree, ReferenceLink, TreeError, TreeNode,
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub indent: IndentStrategy,
    pub flatten: FlattenOptions,
}

/// Everything a parse produces; the tree is usable even with diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub tree: ParsedTree,
    pub flat_index: FlatIndex,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Insertion context: entries deeper than `level` go under `parent`
struct Frame {
    level: Option<usize>,
    parent: Option<NodeId>,
}

/// TreeParser service - turns report lines into a [`ParsedTree`].
///
/// A single pass over the lines with a level stack. The top of the stack is
/// always the parent for the next entry once every frame at the same or a
/// deeper level has been popped. `(*)` entries are resolved against the
/// first node seen for the same `group:name`.
///
/// Bad lines never abort the parse: they are skipped and recorded as
/// diagnostics next to the partial tree.
pub struct TreeParser {
    options: ParseOptions,
}

impl TreeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses `lines`, numbering them from 1
    pub fn parse<I, S>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_numbered(lines.into_iter().enumerate().map(|(i, line)| (i + 1, line)))
    }

    /// Parses lines that carry their own 1-based line numbers, e.g. one
    /// configuration section cut out of a larger report
    pub fn parse_numbered<I, S>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let mut tree = ParsedTree::new();
        let mut diagnostics = Vec::new();
        let mut first_seen: HashMap<String, NodeId> = HashMap::new();
        let mut stack = vec![Frame {
            level: None,
            parent: None,
        }];

        for (line_number, raw) in lines {
            let line = raw.as_ref().trim_end();
            let entry = match parse_entry_line(line, self.options.indent) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(e) => {
                    let error = TreeError::MalformedEntry {
                        line: line_number,
                        reason: e.to_string(),
                    };
                    diagnostics.push(Diagnostic::new(&error, line));
                    continue;
                }
            };

            while stack
                .last()
                .is_some_and(|frame| frame.level.is_some_and(|level| level >= entry.level))
            {
                stack.pop();
            }
            let parent = stack.last().and_then(|frame| frame.parent);
            let identity = entry.coordinate.identity();

            if entry.coordinate.is_reference() {
                let Some(&target) = first_seen.get(&identity) else {
                    let error = TreeError::DanglingReference {
                        line: line_number,
                        identity,
                    };
                    diagnostics.push(Diagnostic::new(&error, line));
                    continue;
                };

                let link =
                    ReferenceLink::new(target, entry.coordinate, line_number, Some(line.to_string()));
                if !tree.add_reference(parent, link) {
                    diagnostics.push(duplicate_sibling(line_number, line));
                }
                continue;
            }

            let node = TreeNode::new(entry.coordinate, line_number, Some(line.to_string()));
            let id = match tree.add_child(parent, node) {
                Ok(id) => id,
                // the repeated entry's children merge into the first one
                Err(Child::Owned(existing)) => {
                    diagnostics.push(duplicate_sibling(line_number, line));
                    existing
                }
                Err(Child::Reference(_)) => {
                    diagnostics.push(duplicate_sibling(line_number, line));
                    continue;
                }
            };

            first_seen.entry(identity).or_insert(id);
            stack.push(Frame {
                level: Some(entry.level),
                parent: Some(id),
            });
        }

        let flat_index = match TreeFlattener::new(self.options.flatten).flatten(&tree) {
            Ok(index) => index,
            Err(error) => {
                let source_line = source_line_at(&tree, error.line());
                diagnostics.push(Diagnostic::new(&error, source_line));
                FlatIndex::new()
            }
        };

        ParseOutcome {
            tree,
            flat_index,
            diagnostics,
        }
    }
}

fn duplicate_sibling(line_number: usize, line: &str) -> Diagnostic {
    let error = TreeError::MalformedEntry {
        line: line_number,
        reason: "duplicate sibling entry".to_string(),
    };
    Diagnostic::new(&error, line)
}

/// Text of the reference or node read from `line_number`, for diagnostics
fn source_line_at(tree: &ParsedTree, line_number: usize) -> String {
    let mut parents: Vec<Option<NodeId>> = vec![None];
    while let Some(parent) = parents.pop() {
        for child in tree.children_of(parent).values() {
            match child {
                Child::Reference(link) if link.line_number() == line_number => {
                    return link.source_line().unwrap_or_default().to_string();
                }
                Child::Owned(id) => {
                    let node = tree.node(*id);
                    if node.line_number() == line_number {
                        return node.source_line().unwrap_or_default().to_string();
                    }
                    parents.push(Some(*id));
                }
                _ => {}
            }
        }
    }
    String::new()
}
