/// Formatter adapters for the supported output shapes
mod flat_json_formatter;
mod nested_json_formatter;
mod tree_text_formatter;

pub use flat_json_formatter::FlatJsonFormatter;
pub use nested_json_formatter::NestedJsonFormatter;
pub use tree_text_formatter::TreeTextFormatter;
