use super::traversal::TreeWalker;
use crate::dependency_tree::domain::{
    ArtifactCoordinate, Child, CoordinateError, FlatIndex, NodeId, ParsedTree, TreeError,
    TreeNode, PATH_SEPARATOR,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Upper bound on path entries produced while expanding references
pub const DEFAULT_PATH_LIMIT: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Walk the subtree behind each `(*)` link below the link's own path
    pub expand_references: bool,
    /// Only applies when `expand_references` is set
    pub path_limit: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            expand_references: false,
            path_limit: DEFAULT_PATH_LIMIT,
        }
    }
}

/// TreeFlattener service - projects a [`ParsedTree`] into a [`FlatIndex`]
/// and rebuilds a tree from a path-qualified map.
pub struct TreeFlattener {
    options: FlattenOptions,
}

impl TreeFlattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    /// Flattens `tree` in document order.
    ///
    /// A reference contributes an entry at its own path carrying the version
    /// of the node it points to. Its subtree is only walked again when
    /// `expand_references` is set.
    ///
    /// # Errors
    /// [`TreeError::CyclicReference`] if expanding references revisits a node
    /// that is already on the current path, and [`TreeError::ExpansionLimit`]
    /// once expansion yields more than `path_limit` entries.
    pub fn flatten(&self, tree: &ParsedTree) -> Result<FlatIndex, TreeError> {
        let mut index = FlatIndex::new();
        let mut path: Vec<String> = Vec::new();

        let mut walker = TreeWalker::new(tree).follow_references(self.options.expand_references);
        if self.options.expand_references {
            walker = walker.limit(self.options.path_limit);
        }

        walker.walk(|step| {
            let coordinate = step.node.coordinate();
            let identity = coordinate.identity();
            path.truncate(step.depth);
            path.push(identity.clone());
            index.insert(path.join(PATH_SEPARATOR), identity, coordinate.version());
        })?;

        Ok(index)
    }

    /// Rebuilds a tree from a path-qualified map.
    ///
    /// Keys are processed in map order, so a map produced by [`flatten`]
    /// yields the same child ordering. A prefix that has no entry of its own
    /// is created with an empty version.
    ///
    /// [`flatten`]: Self::flatten
    pub fn reconstruct(by_path: &IndexMap<String, String>) -> Result<ParsedTree, CoordinateError> {
        let mut tree = ParsedTree::new();
        let mut created: HashMap<String, NodeId> = HashMap::new();

        for path in by_path.keys() {
            let mut parent: Option<NodeId> = None;
            let mut prefix = String::new();

            for segment in path.split(PATH_SEPARATOR) {
                if !prefix.is_empty() {
                    prefix.push_str(PATH_SEPARATOR);
                }
                prefix.push_str(segment);

                let id = match created.get(&prefix) {
                    Some(id) => *id,
                    None => {
                        let version = by_path.get(&prefix).map(String::as_str).unwrap_or("");
                        let coordinate = ArtifactCoordinate::from_identity(segment, version)?;
                        let id = match tree.add_child(parent, TreeNode::new(coordinate, 0, None)) {
                            Ok(id) | Err(Child::Owned(id)) => id,
                            Err(Child::Reference(_)) => continue,
                        };
                        created.insert(prefix.clone(), id);
                        id
                    }
                };
                parent = Some(id);
            }
        }

        Ok(tree)
    }
}
