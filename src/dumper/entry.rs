use std::fs;
use std::path::Path;

/// Outcome of looking up a single configured path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResult {
    /// Raw file contents, unmodified
    Found(Vec<u8>),
    /// Absent, not a regular file, or unreadable
    Missing,
}

impl EntryResult {
    pub fn is_found(&self) -> bool {
        matches!(self, EntryResult::Found(_))
    }
}

/// Check that `path` is a regular file and read it whole.
///
/// A read that fails after the file was seen is reported as `Missing` too.
pub fn read_entry(path: &Path) -> EntryResult {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        tracing::debug!(path = %path.display(), "not a regular file");
        return EntryResult::Missing;
    }

    match fs::read(path) {
        Ok(bytes) => EntryResult::Found(bytes),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "file exists but could not be read");
            EntryResult::Missing
        }
    }
}
