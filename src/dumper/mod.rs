mod entry;
mod error;

pub use entry::{EntryResult, read_entry};
pub use error::DumpError;

use crate::config::FileList;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Line written in place of content for a missing file
pub const MISSING_NOTICE: &str = "File does not exist.";

/// Separator written after every entry: two blank lines
const SEPARATOR: &[u8] = b"\n\n";

/// Counts of per-entry outcomes from one dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub found: usize,
    pub missing: usize,
}

impl DumpSummary {
    pub fn total(&self) -> usize {
        self.found + self.missing
    }
}

/// Immutable dumper over a fixed file list
pub struct Dumper {
    files: FileList,
    /// Base directory relative paths resolve against; `None` means the cwd
    root: Option<PathBuf>,
}

/// Builder for configuring a dumper
pub struct DumperBuilder {
    files: FileList,
    root: Option<PathBuf>,
}

impl DumperBuilder {
    /// Create a builder with the default file list and the current directory
    pub fn new() -> Self {
        Self {
            files: FileList::default(),
            root: None,
        }
    }

    /// Replace the file list
    pub fn files(mut self, files: FileList) -> Self {
        self.files = files;
        self
    }

    /// Resolve paths against `dir` instead of the current directory
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    pub fn build(self) -> Dumper {
        Dumper {
            files: self.files,
            root: self.root,
        }
    }
}

impl Default for DumperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Dumper {
    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// Filesystem location for a configured path
    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }

    /// Look up every configured path, in list order
    pub fn entries(&self) -> impl Iterator<Item = (&str, EntryResult)> + '_ {
        self.files
            .iter()
            .map(move |path| (path, read_entry(&self.resolve(path))))
    }

    /// Write every entry to `out` in list order.
    ///
    /// Missing files never fail the dump; only errors writing to `out` do.
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<DumpSummary, DumpError> {
        let mut summary = DumpSummary::default();

        for (path, result) in self.entries() {
            tracing::debug!(path, found = result.is_found(), "dumping entry");
            write_entry(out, path, &result)?;
            if result.is_found() {
                summary.found += 1;
            } else {
                summary.missing += 1;
            }
        }

        out.flush().map_err(DumpError::Flush)?;

        tracing::info!(
            found = summary.found,
            missing = summary.missing,
            "dump complete"
        );
        Ok(summary)
    }

    /// Dump into an in-memory buffer
    pub fn dump_to_vec(&self) -> Result<(Vec<u8>, DumpSummary), DumpError> {
        let mut buf = Vec::new();
        let summary = self.dump(&mut buf)?;
        Ok((buf, summary))
    }

    /// Base directory, if one was configured
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

/// Write a single entry: header, content or notice, separator.
///
/// Content is written verbatim with no trailing newline added.
pub fn write_entry<W: Write>(
    out: &mut W,
    path: &str,
    result: &EntryResult,
) -> Result<(), DumpError> {
    let wrap = |source| DumpError::Write {
        path: path.to_string(),
        source,
    };

    writeln!(out, "===== {} =====", path).map_err(wrap)?;
    match result {
        EntryResult::Found(bytes) => out.write_all(bytes).map_err(wrap)?,
        EntryResult::Missing => writeln!(out, "{}", MISSING_NOTICE).map_err(wrap)?,
    }
    out.write_all(SEPARATOR).map_err(wrap)?;

    Ok(())
}
