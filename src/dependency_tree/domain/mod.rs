pub mod artifact_coordinate;
pub mod diagnostic;
pub mod errors;
pub mod flat_index;
pub mod parsed_tree;
pub mod tree_node;

pub use artifact_coordinate::{Annotation, ArtifactCoordinate};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use errors::{CoordinateError, TreeError};
pub use flat_index::{FlatIndex, PATH_SEPARATOR};
pub use parsed_tree::{NestedEntry, NestedMap, ParsedTree, TreeStats};
pub use tree_node::{Child, Children, NodeId, ReferenceLink, TreeNode};
