use crate::dependency_tree::services::IndentStrategy;

/// Default column width of one nesting level in `gradle dependencies` output
pub const DEFAULT_INDENT_WIDTH: usize = 5;

/// How entry nesting is measured, as chosen on the command line or in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentMode {
    /// Count `|` continuation bars
    #[default]
    Bars,
    /// Divide the prefix width by a fixed column width
    Columns,
}

impl IndentMode {
    /// Resolves the mode into the parser's strategy
    pub fn strategy(self, width: usize) -> IndentStrategy {
        match self {
            IndentMode::Bars => IndentStrategy::Bars,
            IndentMode::Columns => IndentStrategy::Columns { width },
        }
    }
}

impl std::str::FromStr for IndentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bars" => Ok(IndentMode::Bars),
            "columns" => Ok(IndentMode::Columns),
            _ => Err(format!(
                "Invalid indent mode: {}. Please specify 'bars' or 'columns'",
                s
            )),
        }
    }
}

impl std::fmt::Display for IndentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentMode::Bars => write!(f, "bars"),
            IndentMode::Columns => write!(f, "columns"),
        }
    }
}
