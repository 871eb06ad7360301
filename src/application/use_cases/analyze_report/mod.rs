use crate::application::dto::{AnalyzeRequest, AnalyzeResponse};
use crate::dependency_tree::services::{ParseOutcome, SectionExtractor, TreeParser};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::error::DeptreeError;
use crate::shared::Result;

/// AnalyzeReportUseCase - Core use case for dependency report analysis
///
/// Orchestrates reader -> section extractor -> parser, using generic
/// dependency injection for the infrastructure it touches.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeReportUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> AnalyzeReportUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeReportUseCase with injected dependencies
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// Recovered parse problems do not fail the call; they are reported as
    /// warnings and returned in [`AnalyzeResponse::diagnostics`].
    ///
    /// # Errors
    /// Returns an error if the report cannot be read or the requested
    /// configuration section does not exist.
    pub fn execute(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
        // Step 1: Read the report
        let content = self.read_and_report(&request)?;

        // Step 2: Parse the whole report or a single configuration
        let outcome = match request.configuration.as_deref() {
            Some(name) => self.parse_section(&content, name, &request)?,
            None => self.parse_lines(&content, &request),
        };

        // Step 3: Surface recovered problems
        self.report_diagnostics(&outcome);

        // Step 4: Build and return response
        let response = AnalyzeResponse::new(
            outcome.tree,
            outcome.flat_index,
            outcome.diagnostics,
            request.configuration,
        );
        self.report_summary(&response);

        Ok(response)
    }

    fn read_and_report(&self, request: &AnalyzeRequest) -> Result<String> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency report from: {}",
            request.report_path.display()
        ));

        let content = self.report_reader.read_report(&request.report_path)?;

        self.progress_reporter
            .report(&format!("✅ Read {} line(s)", content.lines().count()));

        Ok(content)
    }

    fn parse_lines(&self, content: &str, request: &AnalyzeRequest) -> ParseOutcome {
        let total = content.lines().count();
        self.progress_reporter.report("🌳 Parsing dependency tree...");

        let outcome = TreeParser::new(request.parse_options).parse(content.lines());

        self.progress_reporter
            .report_progress(total, total, Some("lines parsed"));
        outcome
    }

    /// Parses one configuration section, keeping report line numbers in diagnostics
    fn parse_section(
        &self,
        content: &str,
        name: &str,
        request: &AnalyzeRequest,
    ) -> Result<ParseOutcome> {
        let sections = SectionExtractor::sections(content.lines());

        let Some(section) = sections.iter().find(|section| section.name == name) else {
            let available: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
            return Err(DeptreeError::SectionNotFound {
                name: name.to_string(),
                available: if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available.join(", ")
                },
            }
            .into());
        };

        self.progress_reporter.report(&format!(
            "📂 Extracted configuration '{}' ({} line(s), starting at line {})",
            section.name,
            section.lines.len(),
            section.first_line
        ));
        self.progress_reporter.report("🌳 Parsing dependency tree...");

        let total = section.lines.len();
        let outcome = TreeParser::new(request.parse_options).parse_numbered(section.numbered_lines());

        self.progress_reporter
            .report_progress(total, total, Some("lines parsed"));
        Ok(outcome)
    }

    fn report_diagnostics(&self, outcome: &ParseOutcome) {
        for diagnostic in &outcome.diagnostics {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {}\n   {}",
                diagnostic, diagnostic.source_line
            ));
        }

        if outcome.tree.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No dependency entries were found in the report.");
        }
    }

    fn report_summary(&self, response: &AnalyzeResponse) {
        let stats = &response.stats;
        self.progress_reporter.report(&format!(
            "   - Top-level dependencies: {}",
            stats.roots
        ));
        self.progress_reporter.report(&format!(
            "   - Nodes: {} ({} repeated subtree reference(s))",
            stats.owned_nodes, stats.references
        ));
        self.progress_reporter
            .report(&format!("   - Maximum depth: {}", stats.max_depth));

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: {} distinct artifact(s), {} dependency path(s), {} diagnostic(s)",
            stats.distinct_identities,
            response.flat_index.len(),
            response.diagnostics.len()
        ));
    }
}
