use clap::Parser;
use deptree::application::dto::{IndentMode, OutputFormat};
use std::path::PathBuf;

/// Parse, flatten and re-serialize Gradle dependency-tree reports
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(
    about = "Parse, flatten and re-serialize Gradle dependency-tree reports",
    long_about = None
)]
pub struct Args {
    /// Saved output of `gradle dependencies`
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format: nested, flat or tree [default: nested]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only parse this configuration section, e.g. compileClasspath
    #[arg(short, long, value_name = "NAME")]
    pub configuration: Option<String>,

    /// Keep original report lines (tree output re-emits them verbatim)
    #[arg(long)]
    pub lossless: bool,

    /// How nesting is measured: bars or columns [default: bars]
    #[arg(long)]
    pub indent: Option<IndentMode>,

    /// Columns per nesting level when --indent columns [default: 5]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub indent_width: Option<u16>,

    /// Walk referenced (*) subtrees again when building the flat index
    #[arg(long, conflicts_with = "no_expand_references")]
    pub expand_references: bool,

    /// Only index the (*) line itself, overriding the config file
    #[arg(long)]
    pub no_expand_references: bool,

    /// Maximum flat index entries produced by --expand-references [default: 100000]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub path_limit: Option<u64>,

    /// Exit with code 1 when any report line had to be skipped
    #[arg(long)]
    pub strict: bool,

    /// Config file path (defaults to deptree.config.yml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::parse_from(["deptree", "-i", "deps.txt"]);
        assert_eq!(args.input, PathBuf::from("deps.txt"));
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(!args.lossless);
        assert!(!args.strict);
    }

    #[test]
    fn test_all_args() {
        let args = Args::parse_from([
            "deptree",
            "--input",
            "deps.txt",
            "--format",
            "TREE",
            "-o",
            "out.txt",
            "-c",
            "runtimeClasspath",
            "--lossless",
            "--indent",
            "columns",
            "--indent-width",
            "4",
            "--expand-references",
            "--path-limit",
            "500",
            "--strict",
            "--config",
            "custom.yml",
            "-q",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Tree));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.configuration.as_deref(), Some("runtimeClasspath"));
        assert!(args.lossless);
        assert_eq!(args.indent, Some(IndentMode::Columns));
        assert_eq!(args.indent_width, Some(4));
        assert!(args.expand_references);
        assert_eq!(args.path_limit, Some(500));
        assert!(args.strict);
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert!(args.quiet);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["deptree"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["deptree", "-i", "deps.txt", "-f", "markdown"]).is_err());
    }

    #[test]
    fn test_zero_indent_width_rejected() {
        assert!(
            Args::try_parse_from(["deptree", "-i", "deps.txt", "--indent-width", "0"]).is_err()
        );
    }

    #[test]
    fn test_expand_flags_conflict() {
        assert!(Args::try_parse_from([
            "deptree",
            "-i",
            "deps.txt",
            "--expand-references",
            "--no-expand-references",
        ])
        .is_err());
    }
}
