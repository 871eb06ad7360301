//! deptree - Gradle dependency-tree report parser and serializer
//!
//! This library turns the ASCII tree printed by `gradle dependencies` into
//! structured data and back, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): coordinates, the parsed tree, the
//!   flat index, and the parser/serializer/flattener services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use deptree::prelude::*;
//!
//! let report = "\
//! +--- org.opensearch:opensearch:2.18.0
//! |    \\--- com.fasterxml.jackson.core:jackson-core:2.17.2
//! \\--- com.fasterxml.jackson.core:jackson-databind:2.17.2
//!      \\--- com.fasterxml.jackson.core:jackson-core:2.17.2 (*)";
//!
//! let outcome = TreeParser::new(ParseOptions::default()).parse(report.lines());
//! assert!(!outcome.has_diagnostics());
//! assert_eq!(
//!     outcome.flat_index.version_at_path(
//!         "org.opensearch:opensearch/com.fasterxml.jackson.core:jackson-core"
//!     ),
//!     Some("2.17.2")
//! );
//!
//! let text = TreeSerializer::new(SerializeOptions { lossless: true })
//!     .serialize_to_string(&outcome.tree)
//!     .unwrap();
//! assert_eq!(text, report);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        FlatJsonFormatter, NestedJsonFormatter, TreeTextFormatter,
    };
    pub use crate::application::dto::{AnalyzeRequest, AnalyzeResponse, IndentMode, OutputFormat};
    pub use crate::application::use_cases::AnalyzeReportUseCase;
    pub use crate::dependency_tree::domain::{
        Annotation, ArtifactCoordinate, Child, Diagnostic, DiagnosticKind, FlatIndex, NodeId,
        ParsedTree, TreeError, TreeNode, TreeStats,
    };
    pub use crate::dependency_tree::services::{
        FlattenOptions, IndentStrategy, ParseOptions, ParseOutcome, ReportSection,
        SectionExtractor, SerializeOptions, TreeFlattener, TreeParser, TreeSerializer,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, ReportReader,
    };
    pub use crate::shared::Result;
}
