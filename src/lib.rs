// Public API exports
pub mod config;
pub mod dumper;

// Re-export main types for convenience
pub use config::{DEFAULT_FILES, FileList};
pub use dumper::{
    DumpError, DumpSummary, Dumper, DumperBuilder, EntryResult, MISSING_NOTICE, read_entry,
    write_entry,
};
