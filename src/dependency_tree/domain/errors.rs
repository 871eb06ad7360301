use thiserror::Error;

/// Reasons a coordinate string cannot be turned into an [`ArtifactCoordinate`].
///
/// [`ArtifactCoordinate`]: super::ArtifactCoordinate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("expected at least `group:name`, found `{text}`")]
    MissingSegments { text: String },

    #[error("empty group in `{text}`")]
    EmptyGroup { text: String },

    #[error("empty name in `{text}`")]
    EmptyName { text: String },
}

/// Failures raised by the tree core.
///
/// `MalformedEntry` and `DanglingReference` are recovered by the parser and
/// end up as diagnostics. `CyclicReference` and `ExpansionLimit` abort the
/// traversal that hits them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("line {line}: malformed entry: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("line {line}: reference to `{identity}` has no earlier occurrence")]
    DanglingReference { line: usize, identity: String },

    #[error("line {line}: cyclic reference through `{identity}`")]
    CyclicReference { line: usize, identity: String },

    #[error("line {line}: expanding references exceeded {limit} paths")]
    ExpansionLimit { line: usize, limit: usize },
}

impl TreeError {
    /// 1-based report line the error points at (0 when the node was not parsed from text)
    pub fn line(&self) -> usize {
        match self {
            TreeError::MalformedEntry { line, .. }
            | TreeError::DanglingReference { line, .. }
            | TreeError::CyclicReference { line, .. }
            | TreeError::ExpansionLimit { line, .. } => *line,
        }
    }
}
