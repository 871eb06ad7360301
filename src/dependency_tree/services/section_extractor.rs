/// One configuration block of a `gradle dependencies` report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub name: String,
    pub description: Option<String>,
    /// 1-based report line number of `lines[0]`
    pub first_line: usize,
    pub lines: Vec<String>,
}

impl ReportSection {
    /// Section lines paired with their report line numbers
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(move |(offset, line)| (self.first_line + offset, line.as_str()))
    }
}

/// SectionExtractor service - splits a full report into configuration sections.
///
/// Gradle prints one tree per configuration:
///
/// ```text
/// compileClasspath - Compile classpath for source set 'main'.
/// +--- org.opensearch:opensearch:2.18.0
/// \--- org.slf4j:slf4j-api:2.0.9
///
/// runtimeClasspath - Runtime classpath of source set 'main'.
/// ```
///
/// A section starts at a header line and runs until the next blank line.
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn sections<I, S>(lines: I) -> Vec<ReportSection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sections = Vec::new();
        let mut current: Option<ReportSection> = None;

        for (index, raw) in lines.into_iter().enumerate() {
            let line = raw.as_ref().trim_end();

            if line.is_empty() {
                sections.extend(current.take());
                continue;
            }

            if let Some((name, description)) = Self::parse_header(line) {
                sections.extend(current.take());
                current = Some(ReportSection {
                    name,
                    description,
                    first_line: index + 2,
                    lines: Vec::new(),
                });
                continue;
            }

            if let Some(section) = current.as_mut() {
                section.lines.push(line.to_string());
            }
        }

        sections.extend(current);
        sections
    }

    /// The first section called `name`, if any
    pub fn extract<I, S>(lines: I, name: &str) -> Option<ReportSection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::sections(lines)
            .into_iter()
            .find(|section| section.name == name)
    }

    /// `name` or `name - description` at column 0, where `name` is a single
    /// identifier. Rejects tree lines and prose such as `BUILD SUCCESSFUL in 2s`.
    fn parse_header(line: &str) -> Option<(String, Option<String>)> {
        let (name, description) = match line.split_once(" - ") {
            Some((name, description)) => (name, Some(description.trim().to_string())),
            None => (line, None),
        };

        let is_identifier = !name.is_empty()
            && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

        is_identifier.then(|| (name.to_string(), description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
> Task :dependencies

------------------------------------------------------------
Root project 'alerting'
------------------------------------------------------------

annotationProcessor - Annotation processors and their dependencies for source set 'main'.
No dependencies

compileClasspath - Compile classpath for source set 'main'.
+--- org.opensearch:opensearch:2.18.0
|    \\--- org.opensearch:opensearch-core:2.18.0
\\--- org.slf4j:slf4j-api:2.0.9

runtimeClasspath - Runtime classpath of source set 'main'.
\\--- org.slf4j:slf4j-api:2.0.9

(*) - Indicates repeated occurrences of a transitive dependency subtree. Gradle expands transitive dependency subtrees only once per project; repeat occurrences only display the root of the subtree, followed by this annotation.

BUILD SUCCESSFUL in 2s";

    #[test]
    fn test_sections() {
        let sections = SectionExtractor::sections(REPORT.lines());
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["annotationProcessor", "compileClasspath", "runtimeClasspath"]
        );
        assert_eq!(sections[0].lines, vec!["No dependencies"]);
        assert_eq!(
            sections[1].description.as_deref(),
            Some("Compile classpath for source set 'main'.")
        );
    }

    #[test]
    fn test_extract_keeps_report_line_numbers() {
        let section = SectionExtractor::extract(REPORT.lines(), "compileClasspath").unwrap();
        assert_eq!(section.lines.len(), 3);
        assert_eq!(section.first_line, 11);

        let numbered: Vec<(usize, &str)> = section.numbered_lines().collect();
        assert_eq!(numbered[0], (11, "+--- org.opensearch:opensearch:2.18.0"));
        assert_eq!(numbered[2], (13, "\\--- org.slf4j:slf4j-api:2.0.9"));
    }

    #[test]
    fn test_extract_missing_section() {
        assert!(SectionExtractor::extract(REPORT.lines(), "testRuntimeClasspath").is_none());
    }

    #[test]
    fn test_header_without_description() {
        let sections = SectionExtractor::sections(["default", "+--- a:b:1.0"]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "default");
        assert!(sections[0].description.is_none());
        assert_eq!(sections[0].first_line, 2);
    }

    #[test]
    fn test_non_headers() {
        for line in [
            "+--- a:b:1.0",
            "BUILD SUCCESSFUL in 2s",
            "Root project 'alerting'",
            "> Task :dependencies",
            "(*) - Indicates repeated occurrences",
            "------------------------------------------------------------",
        ] {
            assert!(SectionExtractor::parse_header(line).is_none(), "{line:?}");
        }
    }
}
