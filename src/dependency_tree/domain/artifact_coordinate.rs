use super::errors::CoordinateError;
use serde::Serialize;
use std::fmt;

/// Separator Gradle prints between a requested and a resolved version
const VERSION_ARROW: &str = " -> ";

/// Trailing marker Gradle appends to an entry line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    #[default]
    None,
    /// `(*)` - subtree already printed earlier in the report
    Reference,
    /// `(n)` - not resolved (configuration cannot be resolved)
    NotResolved,
    /// `(c)` - dependency constraint, not a real dependency
    Constraint,
}

impl Annotation {
    const MARKERS: [(&'static str, Annotation); 3] = [
        ("(*)", Annotation::Reference),
        ("(n)", Annotation::NotResolved),
        ("(c)", Annotation::Constraint),
    ];

    pub fn marker(self) -> Option<&'static str> {
        match self {
            Annotation::None => None,
            Annotation::Reference => Some("(*)"),
            Annotation::NotResolved => Some("(n)"),
            Annotation::Constraint => Some("(c)"),
        }
    }

    /// Splits a trailing marker off `text`, returning the remaining body
    fn split(text: &str) -> (&str, Annotation) {
        let trimmed = text.trim_end();
        for (marker, annotation) in Self::MARKERS {
            if let Some(body) = trimmed.strip_suffix(marker) {
                return (body.trim_end(), annotation);
            }
        }
        (trimmed, Annotation::None)
    }
}

/// Value object for a `group:name:version` dependency coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ArtifactCoordinate {
    group: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_version: Option<String>,
    annotation: Annotation,
}

impl ArtifactCoordinate {
    pub fn new(group: String, name: String, version: String) -> Result<Self, CoordinateError> {
        if group.is_empty() {
            return Err(CoordinateError::EmptyGroup {
                text: format!("{}:{}", group, name),
            });
        }
        if name.is_empty() {
            return Err(CoordinateError::EmptyName {
                text: format!("{}:{}", group, name),
            });
        }

        Ok(Self {
            group,
            name,
            version,
            requested_version: None,
            annotation: Annotation::None,
        })
    }

    /// Builds a coordinate from a bare `group:name` identity and a version
    pub fn from_identity(identity: &str, version: &str) -> Result<Self, CoordinateError> {
        let (group, name) =
            identity
                .split_once(':')
                .ok_or_else(|| CoordinateError::MissingSegments {
                    text: identity.to_string(),
                })?;
        Self::new(group.to_string(), name.to_string(), version.to_string())
    }

    /// Parses the payload of an entry line, i.e. everything after `+--- `.
    ///
    /// Accepted shapes:
    /// - `group:name:version`
    /// - `group:name` (unresolved, empty version)
    /// - `group:name:1.0 -> 2.0` and `group:name -> 2.0` (conflict resolution)
    /// - any of the above followed by ` (*)`, ` (n)` or ` (c)`
    ///
    /// With more than three segments the last one is the version and the
    /// name keeps the remaining colons (`g:n:classifier:1.0`).
    pub fn parse(text: &str) -> Result<Self, CoordinateError> {
        let (body, annotation) = Annotation::split(text);
        let (declared, resolved) = match body.split_once(VERSION_ARROW) {
            Some((left, right)) => (left.trim(), Some(right.trim())),
            None => (body.trim(), None),
        };

        let segments: Vec<&str> = declared.split(':').map(str::trim).collect();
        if segments.len() < 2 {
            return Err(CoordinateError::MissingSegments {
                text: text.trim().to_string(),
            });
        }

        let (identity_segments, declared_version) = if segments.len() >= 3 {
            let (identity, version) = segments.split_at(segments.len() - 1);
            (identity, version[0])
        } else {
            (&segments[..], "")
        };

        let group = identity_segments[0];
        let name = identity_segments[1..].join(":");
        if group.is_empty() {
            return Err(CoordinateError::EmptyGroup {
                text: text.trim().to_string(),
            });
        }
        if name.is_empty() {
            return Err(CoordinateError::EmptyName {
                text: text.trim().to_string(),
            });
        }

        let (version, requested_version) = match resolved {
            Some(resolved) => (resolved.to_string(), Some(declared_version.to_string())),
            None => (declared_version.to_string(), None),
        };

        Ok(Self {
            group: group.to_string(),
            name,
            version,
            requested_version,
            annotation,
        })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved version; empty when the report left the dependency unresolved
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Version requested before conflict resolution, if the line had an arrow
    pub fn requested_version(&self) -> Option<&str> {
        self.requested_version.as_deref()
    }

    pub fn annotation(&self) -> Annotation {
        self.annotation
    }

    pub fn is_reference(&self) -> bool {
        self.annotation == Annotation::Reference
    }

    /// `group:name`
    pub fn identity(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// Full coordinate without the trailing marker; used as the sibling key
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Canonical entry payload, including the trailing marker if any
    pub fn entry_text(&self) -> String {
        match self.annotation.marker() {
            Some(marker) => format!("{} {}", self, marker),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        match &self.requested_version {
            Some(requested) if requested.is_empty() => write!(f, "{}{}", VERSION_ARROW, self.version),
            Some(requested) => write!(f, ":{}{}{}", requested, VERSION_ARROW, self.version),
            None if self.version.is_empty() => Ok(()),
            None => write!(f, ":{}", self.version),
        }
    }
}
