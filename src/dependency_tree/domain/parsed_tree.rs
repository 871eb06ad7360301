use super::{ArtifactCoordinate, Child, Children, NodeId, ReferenceLink, TreeNode};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// ParsedTree aggregate - the forest of dependencies printed in one report.
///
/// Owned nodes live in an arena and are addressed by [`NodeId`]. A `(*)`
/// entry is stored as a [`ReferenceLink`] holding the id of the node it
/// repeats, so a shared subtree exists exactly once. Nodes can only be added
/// as fresh children, which keeps the owned edges a proper tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTree {
    nodes: Vec<TreeNode>,
    roots: Children,
}

/// Summary counts for a parsed report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub roots: usize,
    pub owned_nodes: usize,
    pub references: usize,
    pub distinct_identities: usize,
    pub max_depth: usize,
}

/// One entry of the nested structural form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedEntry {
    pub version: String,
    #[serde(skip_serializing_if = "is_false")]
    pub reference: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    pub dependencies: NestedMap,
}

/// Mapping of mappings mirroring the tree shape, ready for serde
pub type NestedMap = IndexMap<String, NestedEntry>;

fn is_false(value: &bool) -> bool {
    !*value
}

impl ParsedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` as the last child of `parent` (`None` = top level).
    ///
    /// # Errors
    /// When `parent` already has a child under the same coordinate key the
    /// tree is left untouched and the existing edge is returned.
    pub fn add_child(&mut self, parent: Option<NodeId>, node: TreeNode) -> Result<NodeId, Child> {
        let key = node.coordinate().key();
        if let Some(existing) = self.children_of(parent).get(&key) {
            return Err(existing.clone());
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        self.children_of_mut(parent).insert(key, Child::Owned(id));
        Ok(id)
    }

    /// Adds a non-owning link to an existing node under `parent`.
    ///
    /// The link is keyed by the coordinate written on its own line. Returns
    /// `false` when the key is already taken or the target does not belong
    /// to this tree.
    pub fn add_reference(&mut self, parent: Option<NodeId>, link: ReferenceLink) -> bool {
        if self.get(link.target()).is_none() {
            return false;
        }
        let key = link.coordinate().key();
        if self.children_of(parent).contains_key(&key) {
            return false;
        }

        self.children_of_mut(parent)
            .insert(key, Child::Reference(link));
        true
    }

    pub fn roots(&self) -> &Children {
        &self.roots
    }

    /// Children of `parent`, or the top-level entries for `None`
    pub fn children_of(&self, parent: Option<NodeId>) -> &Children {
        match parent {
            Some(id) => self.node(id).children(),
            None => &self.roots,
        }
    }

    fn children_of_mut(&mut self, parent: Option<NodeId>) -> &mut Children {
        match parent {
            Some(id) => self.nodes[id.index()].children_mut(),
            None => &mut self.roots,
        }
    }

    /// # Panics
    /// Panics if `id` was not produced by this tree.
    pub(crate) fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// Number of owned nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First owned node (in creation order) whose coordinate matches `identity`
    pub fn find_by_identity(&self, identity: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.coordinate().identity() == identity)
            .map(NodeId::new)
    }

    /// Coordinates of every owned node, in document order
    pub fn coordinates(&self) -> impl Iterator<Item = &ArtifactCoordinate> {
        self.nodes.iter().map(TreeNode::coordinate)
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            roots: self.roots.len(),
            ..TreeStats::default()
        };
        let mut identities = HashSet::new();
        self.collect_stats(&self.roots, 1, &mut stats, &mut identities);
        stats.distinct_identities = identities.len();
        stats
    }

    fn collect_stats(
        &self,
        children: &Children,
        depth: usize,
        stats: &mut TreeStats,
        identities: &mut HashSet<String>,
    ) {
        for child in children.values() {
            match child {
                Child::Reference(_) => stats.references += 1,
                Child::Owned(id) => {
                    let node = self.node(*id);
                    stats.owned_nodes += 1;
                    stats.max_depth = stats.max_depth.max(depth);
                    identities.insert(node.coordinate().identity());
                    self.collect_stats(node.children(), depth + 1, stats, identities);
                }
            }
        }
    }

    /// Converts the tree into nested maps.
    ///
    /// References are not expanded; they appear under their own coordinate
    /// with `reference: true`, the target's version and no dependencies. `include_original` keeps the
    /// source line of each entry.
    pub fn to_nested_map(&self, include_original: bool) -> NestedMap {
        self.nest(&self.roots, include_original)
    }

    fn nest(&self, children: &Children, include_original: bool) -> NestedMap {
        children
            .iter()
            .map(|(key, child)| {
                let entry = match child {
                    Child::Owned(id) => {
                        let node = self.node(*id);
                        NestedEntry {
                            version: node.coordinate().version().to_string(),
                            reference: false,
                            original: include_original
                                .then(|| node.source_line().map(String::from))
                                .flatten(),
                            dependencies: self.nest(node.children(), include_original),
                        }
                    }
                    Child::Reference(link) => NestedEntry {
                        version: self.node(link.target()).coordinate().version().to_string(),
                        reference: true,
                        original: include_original
                            .then(|| link.source_line().map(String::from))
                            .flatten(),
                        dependencies: NestedMap::new(),
                    },
                };
                (key.clone(), entry)
            })
            .collect()
    }
}
