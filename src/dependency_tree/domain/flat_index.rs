use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator between identities in a path-qualified key
pub const PATH_SEPARATOR: &str = "/";

/// Flat projection of a [`ParsedTree`](super::ParsedTree).
///
/// Two addressing modes are kept side by side:
/// - `by_path`: slash-joined identities from a root down to the node, e.g.
///   `org.opensearch:opensearch/com.fasterxml.jackson.core:jackson-core`
/// - `by_identity`: bare `group:name`
///
/// Both maps keep the version of the first occurrence in document order;
/// later occurrences never overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatIndex {
    by_path: IndexMap<String, String>,
    by_identity: IndexMap<String, String>,
}

impl FlatIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence. Returns `true` if the path key was new.
    pub fn insert(&mut self, path: String, identity: String, version: &str) -> bool {
        self.by_identity
            .entry(identity)
            .or_insert_with(|| version.to_string());

        if self.by_path.contains_key(&path) {
            return false;
        }
        self.by_path.insert(path, version.to_string());
        true
    }

    pub fn by_path(&self) -> &IndexMap<String, String> {
        &self.by_path
    }

    pub fn by_identity(&self) -> &IndexMap<String, String> {
        &self.by_identity
    }

    pub fn version_at_path(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    pub fn version_of(&self, identity: &str) -> Option<&str> {
        self.by_identity.get(identity).map(String::as_str)
    }

    /// Number of path-qualified entries
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// `group -> name -> version`, built from the identity map
    pub fn grouped(&self) -> IndexMap<String, IndexMap<String, String>> {
        let mut grouped: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        for (identity, version) in &self.by_identity {
            if let Some((group, name)) = identity.split_once(':') {
                grouped
                    .entry(group.to_string())
                    .or_default()
                    .insert(name.to_string(), version.clone());
            }
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_first_occurrence_wins() {
        let mut index = FlatIndex::new();
        index.insert("a:x".to_string(), "a:x".to_string(), "1.0");
        index.insert("b:y/a:x".to_string(), "a:x".to_string(), "2.0");

        assert_eq!(index.version_of("a:x"), Some("1.0"));
        assert_eq!(index.version_at_path("b:y/a:x"), Some("2.0"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_path_first_occurrence_wins() {
        let mut index = FlatIndex::new();
        assert!(index.insert("a:x".to_string(), "a:x".to_string(), "1.0"));
        assert!(!index.insert("a:x".to_string(), "a:x".to_string(), "2.0"));
        assert_eq!(index.version_at_path("a:x"), Some("1.0"));
    }

    #[test]
    fn test_grouped() {
        let mut index = FlatIndex::new();
        index.insert("org.opensearch:opensearch".to_string(), "org.opensearch:opensearch".to_string(), "2.18.0");
        index.insert(
            "org.opensearch:opensearch/org.opensearch:opensearch-core".to_string(),
            "org.opensearch:opensearch-core".to_string(),
            "2.18.0",
        );
        index.insert("org.slf4j:slf4j-api".to_string(), "org.slf4j:slf4j-api".to_string(), "2.0.9");

        let grouped = index.grouped();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["org.opensearch"]["opensearch-core"], "2.18.0");
        assert_eq!(grouped["org.slf4j"]["slf4j-api"], "2.0.9");
    }

    #[test]
    fn test_serialized_shape() {
        let mut index = FlatIndex::new();
        index.insert("a:b".to_string(), "a:b".to_string(), "1.0");

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "by_path": { "a:b": "1.0" },
                "by_identity": { "a:b": "1.0" }
            })
        );
    }
}
