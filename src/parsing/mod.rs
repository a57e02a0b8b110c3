pub mod loader;
pub mod verse_parser;

// Re-export the entry points the pipeline drives
pub use loader::{load_source, strip_boilerplate, Markers};
pub use verse_parser::parse_verses;
