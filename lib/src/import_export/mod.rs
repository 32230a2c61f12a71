pub mod export;
pub mod import;
pub mod intermediate;
pub mod markup;

// Re-export main entry points for convenience
pub use export::{BookmarkExporter, IntermediateJsonExporter, RaindropExporter, RaindropHtmlBuilder};
pub use import::{parse_bookmarks, parse_bookmarks_file, BookmarkParser, ImportOptions};
pub use intermediate::{from_intermediate_json, read_intermediate_file, to_intermediate_json};
