mod entry_line;
mod section_extractor;
mod traversal;
mod tree_flattener;
mod tree_parser;
mod tree_serializer;

pub use entry_line::{parse_entry_line, EntryLine, EntryMarker, IndentStrategy};
pub use section_extractor::{ReportSection, SectionExtractor};
pub use traversal::{Step, TreeWalker};
pub use tree_flattener::{FlattenOptions, TreeFlattener, DEFAULT_PATH_LIMIT};
pub use tree_parser::{ParseOptions, ParseOutcome, TreeParser};
pub use tree_serializer::{SerializeOptions, TreeSerializer, ENTRY_PREFIX, INDENT_UNIT};
