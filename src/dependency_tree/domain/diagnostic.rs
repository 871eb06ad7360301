use super::TreeError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MalformedEntry,
    DanglingReference,
    CyclicReference,
    ExpansionLimit,
}

/// A problem the parser recovered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line_number: usize,
    pub kind: DiagnosticKind,
    pub reason: String,
    pub source_line: String,
}

impl Diagnostic {
    pub fn new(error: &TreeError, source_line: impl Into<String>) -> Self {
        let (kind, reason) = match error {
            TreeError::MalformedEntry { reason, .. } => (DiagnosticKind::MalformedEntry, reason.clone()),
            TreeError::DanglingReference { identity, .. } => (
                DiagnosticKind::DanglingReference,
                format!("`{}` is marked (*) but was not printed earlier", identity),
            ),
            TreeError::CyclicReference { identity, .. } => (
                DiagnosticKind::CyclicReference,
                format!("following `{}` leads back to one of its ancestors", identity),
            ),
            TreeError::ExpansionLimit { limit, .. } => (
                DiagnosticKind::ExpansionLimit,
                format!(
                    "expanding references produced more than {} paths; the flat index was dropped",
                    limit
                ),
            ),
        };

        Self {
            line_number: error.line(),
            kind,
            reason,
            source_line: source_line.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}
