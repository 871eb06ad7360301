/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the dependency_tree core isolated.
mod analyze_request;
mod analyze_response;
mod indent_mode;
mod output_format;

pub use analyze_request::AnalyzeRequest;
pub use analyze_response::AnalyzeResponse;
pub use indent_mode::{IndentMode, DEFAULT_INDENT_WIDTH};
pub use output_format::OutputFormat;
