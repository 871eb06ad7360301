/// Output format enumeration for analyzed reports
///
/// This enum represents the supported output shapes. It belongs in the
/// application layer as both the CLI (inbound adapter) and formatters
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Nested JSON mirroring the tree shape (default)
    #[default]
    Nested,
    /// Flat JSON keyed by dependency path and by identity
    Flat,
    /// Regenerated tree text
    Tree,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" | "json" => Ok(OutputFormat::Nested),
            "flat" => Ok(OutputFormat::Flat),
            "tree" | "text" => Ok(OutputFormat::Tree),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'nested', 'flat' or 'tree'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Nested => write!(f, "nested"),
            OutputFormat::Flat => write!(f, "flat"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}
