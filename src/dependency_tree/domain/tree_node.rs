use super::ArtifactCoordinate;
use indexmap::IndexMap;

/// Index of an owned node inside a [`ParsedTree`] arena.
///
/// Ids are only minted by the tree that owns the node and are meaningless
/// for any other tree.
///
/// [`ParsedTree`]: super::ParsedTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Non-owning link to a node printed earlier in the report (`(*)` lines).
///
/// The link keeps the coordinate written on its own line, which can differ
/// from the target's (e.g. another requested version before `->`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
    target: NodeId,
    coordinate: ArtifactCoordinate,
    line_number: usize,
    source_line: Option<String>,
}

impl ReferenceLink {
    pub fn new(
        target: NodeId,
        coordinate: ArtifactCoordinate,
        line_number: usize,
        source_line: Option<String>,
    ) -> Self {
        Self {
            target,
            coordinate,
            line_number,
            source_line,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }
}

/// An edge from a parent to one of its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Owned(NodeId),
    Reference(ReferenceLink),
}

impl Child {
    /// The node this edge leads to (the link target for references)
    pub fn node_id(&self) -> NodeId {
        match self {
            Child::Owned(id) => *id,
            Child::Reference(link) => link.target(),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Child::Reference(_))
    }
}

/// Children keyed by full coordinate, in first-seen order
pub type Children = IndexMap<String, Child>;

/// One dependency entry of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    coordinate: ArtifactCoordinate,
    children: Children,
    line_number: usize,
    source_line: Option<String>,
}

impl TreeNode {
    /// `line_number` is 1-based; use 0 for nodes that were not read from text
    pub fn new(coordinate: ArtifactCoordinate, line_number: usize, source_line: Option<String>) -> Self {
        Self {
            coordinate,
            children: Children::new(),
            line_number,
            source_line,
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Children {
        &mut self.children
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Original report line, kept for lossless serialization
    pub fn source_line(&self) -> Option<&str> {
        self.source_line.as_deref()
    }
}
