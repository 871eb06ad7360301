use crate::dependency_tree::domain::{ArtifactCoordinate, CoordinateError};

/// Marker for an entry that has later siblings
pub const BRANCH_MARKER: &str = "+---";

/// Marker for the last child of a parent; only ever read, never written
pub const LAST_MARKER: &str = "\\---";

/// How the nesting level of an entry line is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentStrategy {
    /// Level = number of `|` glyphs before the marker.
    /// Insensitive to how much padding surrounds the bars.
    #[default]
    Bars,
    /// Level = column of the marker divided by `width`.
    /// Gradle indents the children of a `\---` entry with spaces only, so
    /// full Gradle reports need this mode (with `width` 5).
    Columns { width: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMarker {
    Branch,
    Last,
}

/// A dependency line split into its structural parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub level: usize,
    pub marker: EntryMarker,
    pub coordinate: ArtifactCoordinate,
}

/// Recognises one line of a dependency report.
///
/// - `Ok(None)`: not an entry (headers, blank lines, notices, a bare `\---`)
/// - `Ok(Some(_))`: an entry line
/// - `Err(_)`: the line carries an entry marker but its payload is not a
///   usable coordinate
pub fn parse_entry_line(
    line: &str,
    strategy: IndentStrategy,
) -> Result<Option<EntryLine>, CoordinateError> {
    let line = line.trim_end();
    let prefix_len = line
        .find(|c: char| c != '|' && c != ' ' && c != '\t')
        .unwrap_or(line.len());
    let (prefix, rest) = line.split_at(prefix_len);

    let (marker, payload) = if let Some(payload) = rest.strip_prefix(BRANCH_MARKER) {
        (EntryMarker::Branch, payload)
    } else if let Some(payload) = rest.strip_prefix(LAST_MARKER) {
        (EntryMarker::Last, payload)
    } else {
        return Ok(None);
    };

    let payload = payload.trim();
    if payload.is_empty() {
        return Ok(None);
    }

    let level = match strategy {
        IndentStrategy::Bars => prefix.matches('|').count(),
        IndentStrategy::Columns { width } => prefix.len() / width.max(1),
    };

    Ok(Some(EntryLine {
        level,
        marker,
        coordinate: ArtifactCoordinate::parse(payload)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str) -> EntryLine {
        parse_entry_line(line, IndentStrategy::Bars).unwrap().unwrap()
    }

    #[test]
    fn test_top_level_entry() {
        let entry = entry("+--- org.opensearch:opensearch:2.18.0");
        assert_eq!(entry.level, 0);
        assert_eq!(entry.marker, EntryMarker::Branch);
        assert_eq!(entry.coordinate.identity(), "org.opensearch:opensearch");
    }

    #[test]
    fn test_level_counts_bars_not_columns() {
        assert_eq!(entry("|    +--- a:b:1.0").level, 1);
        assert_eq!(entry("|   +--- a:b:1.0").level, 1);
        assert_eq!(entry("|    |    \\--- a:b:1.0").level, 2);
        assert_eq!(entry("|  |  +--- a:b:1.0").level, 2);
    }

    #[test]
    fn test_last_marker() {
        let entry = entry("\\--- org.slf4j:slf4j-api:2.0.9");
        assert_eq!(entry.marker, EntryMarker::Last);
        assert_eq!(entry.level, 0);
    }

    #[test]
    fn test_column_strategy() {
        let strategy = IndentStrategy::Columns { width: 5 };
        let nested_under_last = parse_entry_line("     \\--- a:b:1.0", strategy).unwrap().unwrap();
        assert_eq!(nested_under_last.level, 1);

        let deep = parse_entry_line("|    |         +--- a:b:1.0", strategy).unwrap().unwrap();
        assert_eq!(deep.level, 3);

        let bars = parse_entry_line("     \\--- a:b:1.0", IndentStrategy::Bars).unwrap().unwrap();
        assert_eq!(bars.level, 0);
    }

    #[test]
    fn test_non_entry_lines() {
        for line in [
            "",
            "compileClasspath - Compile classpath for source set 'main'.",
            "No dependencies",
            "(*) - Indicates repeated occurrences of a transitive dependency subtree.",
            "\\---",
            "|    \\---   ",
            "BUILD SUCCESSFUL in 2s",
        ] {
            assert_eq!(parse_entry_line(line, IndentStrategy::Bars), Ok(None), "{line:?}");
        }
    }

    #[test]
    fn test_malformed_entry() {
        let result = parse_entry_line("+--- incomplete-entry", IndentStrategy::Bars);
        assert!(matches!(result, Err(CoordinateError::MissingSegments { .. })));
    }

    #[test]
    fn test_trailing_carriage_return() {
        let entry = entry("+--- a:b:1.0 (*)\r");
        assert!(entry.coordinate.is_reference());
        assert_eq!(entry.coordinate.version(), "1.0");
    }
}
