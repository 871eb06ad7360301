use crate::adapters::outbound::formatters::{
    FlatJsonFormatter, NestedJsonFormatter, TreeTextFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `lossless` keeps original report lines: the tree formatter re-emits
    /// them verbatim and the nested formatter adds an `original` field.
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree, false);
    /// ```
    pub fn create(format: OutputFormat, lossless: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Nested => Box::new(NestedJsonFormatter::new(lossless)),
            OutputFormat::Flat => Box::new(FlatJsonFormatter::new()),
            OutputFormat::Tree => Box::new(TreeTextFormatter::new(lossless)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Flat);
    /// assert_eq!(message, "📝 Generating flat JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Nested => "📝 Generating nested JSON output...",
            OutputFormat::Flat => "📝 Generating flat JSON output...",
            OutputFormat::Tree => "📝 Generating dependency tree text...",
        }
    }
}
