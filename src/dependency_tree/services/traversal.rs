use crate::dependency_tree::domain::{
    ArtifactCoordinate, Child, Children, NodeId, ParsedTree, TreeError, TreeNode,
};

/// One visited edge during a depth-first walk
pub struct Step<'a> {
    /// 0 for top-level entries
    pub depth: usize,
    /// Key of the edge in its parent's children
    pub key: &'a str,
    pub child: &'a Child,
    /// Node the edge leads to (the link target for references)
    pub node: &'a TreeNode,
}

impl Step<'_> {
    pub fn is_reference(&self) -> bool {
        self.child.is_reference()
    }

    /// Coordinate as written on this edge's own line
    pub fn coordinate(&self) -> &ArtifactCoordinate {
        match self.child {
            Child::Owned(_) => self.node.coordinate(),
            Child::Reference(link) => link.coordinate(),
        }
    }

    /// The report line this edge was read from
    pub fn source_line(&self) -> Option<&str> {
        match self.child {
            Child::Owned(_) => self.node.source_line(),
            Child::Reference(link) => link.source_line(),
        }
    }

    fn line_number(&self) -> usize {
        match self.child {
            Child::Owned(_) => self.node.line_number(),
            Child::Reference(link) => link.line_number(),
        }
    }
}

/// Depth-first, document-order walk over a [`ParsedTree`] with a cycle guard.
///
/// When `follow_references` is set, the subtree behind each reference is
/// walked below the reference's own position. The ids currently on the walk
/// path are tracked, and reaching one of them again fails with
/// [`TreeError::CyclicReference`] instead of recursing forever.
///
/// Shared subtrees that reference each other multiply the number of visited
/// edges, so a walk can be capped with [`limit`](Self::limit).
pub struct TreeWalker<'a> {
    tree: &'a ParsedTree,
    follow_references: bool,
    limit: Option<usize>,
}

struct WalkState {
    path: Vec<NodeId>,
    visited: usize,
}

impl<'a> TreeWalker<'a> {
    pub fn new(tree: &'a ParsedTree) -> Self {
        Self {
            tree,
            follow_references: false,
            limit: None,
        }
    }

    pub fn follow_references(mut self, follow: bool) -> Self {
        self.follow_references = follow;
        self
    }

    /// Fail with [`TreeError::ExpansionLimit`] once more than `max_steps`
    /// edges have been visited
    pub fn limit(mut self, max_steps: usize) -> Self {
        self.limit = Some(max_steps);
        self
    }

    pub fn walk<F>(&self, mut visit: F) -> Result<(), TreeError>
    where
        F: FnMut(&Step<'a>),
    {
        let mut state = WalkState {
            path: Vec::new(),
            visited: 0,
        };
        self.walk_children(self.tree.roots(), 0, &mut state, &mut visit)
    }

    fn walk_children<F>(
        &self,
        children: &'a Children,
        depth: usize,
        state: &mut WalkState,
        visit: &mut F,
    ) -> Result<(), TreeError>
    where
        F: FnMut(&Step<'a>),
    {
        for (key, child) in children {
            let id = child.node_id();
            let step = Step {
                depth,
                key,
                child,
                node: self.tree.node(id),
            };

            let descend = match child {
                Child::Owned(_) => true,
                Child::Reference(_) => self.follow_references,
            };

            if descend && state.path.contains(&id) {
                return Err(TreeError::CyclicReference {
                    line: step.line_number(),
                    identity: step.node.coordinate().identity(),
                });
            }

            state.visited += 1;
            if let Some(limit) = self.limit {
                if state.visited > limit {
                    return Err(TreeError::ExpansionLimit {
                        line: step.line_number(),
                        limit,
                    });
                }
            }

            visit(&step);

            if descend {
                state.path.push(id);
                self.walk_children(step.node.children(), depth + 1, state, visit)?;
                state.path.pop();
            }
        }
        Ok(())
    }
}
