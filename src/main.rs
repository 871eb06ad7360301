mod cli;

use cli::Args;
use deptree::adapters::outbound::console::StderrProgressReporter;
use deptree::adapters::outbound::filesystem::FileSystemReader;
use deptree::application::dto::{AnalyzeRequest, OutputFormat, DEFAULT_INDENT_WIDTH};
use deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use deptree::application::use_cases::AnalyzeReportUseCase;
use deptree::config::{self, ConfigFile, CONFIG_FILENAME};
use deptree::dependency_tree::services::{FlattenOptions, ParseOptions, DEFAULT_PATH_LIMIT};
use deptree::shared::error::ExitCode;
use deptree::shared::Result;
use std::process;

/// Effective options after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    configuration: Option<String>,
    lossless: bool,
    strict: bool,
    parse_options: ParseOptions,
}

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = resolve_settings(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = AnalyzeReportUseCase::new(report_reader, progress_reporter);
    let request = AnalyzeRequest::new(
        args.input.clone(),
        settings.configuration.clone(),
        settings.parse_options,
    );
    let response = use_case.execute(request)?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format, settings.lossless);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    if settings.strict && response.has_diagnostics() {
        eprintln!(
            "❌ {} line(s) could not be parsed (--strict)",
            response.diagnostics.len()
        );
        return Ok(ExitCode::DiagnosticsReported);
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config` path, else `deptree.config.yml` in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        if !args.quiet {
            eprintln!("🔧 Loaded config from: {}", path.display());
        }
        return Ok(Some(config));
    }

    let cwd = std::env::current_dir()?;
    let config = config::discover_config(&cwd)?;
    if config.is_some() && !args.quiet {
        eprintln!(
            "🔧 Auto-discovered config file: {}",
            cwd.join(CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let default_config = ConfigFile::default();
    let config = config.unwrap_or(&default_config);

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let indent = match args.indent {
        Some(indent) => indent,
        None => config.indent_mode()?.unwrap_or_default(),
    };
    let indent_width = args
        .indent_width
        .map(usize::from)
        .or(config.indent_width)
        .unwrap_or(DEFAULT_INDENT_WIDTH);
    let expand_references = if args.expand_references {
        true
    } else if args.no_expand_references {
        false
    } else {
        config.expand_references.unwrap_or(false)
    };
    let path_limit = args
        .path_limit
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
        .or(config.path_limit)
        .unwrap_or(DEFAULT_PATH_LIMIT);

    Ok(Settings {
        format,
        configuration: args
            .configuration
            .clone()
            .or_else(|| config.configuration.clone()),
        lossless: args.lossless || config.lossless.unwrap_or(false),
        strict: args.strict || config.strict.unwrap_or(false),
        parse_options: ParseOptions {
            indent: indent.strategy(indent_width),
            flatten: FlattenOptions {
                expand_references,
                path_limit,
            },
        },
    })
}
