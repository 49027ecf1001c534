use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Files dumped when no paths or manifest are given
pub const DEFAULT_FILES: [&str; 9] = [
    "board.py",
    "gpt.txt",
    "main.py",
    "pieces.py",
    "README.md",
    "requirements.txt",
    "run_tests.sh",
    "test.py",
    "utils.py",
];

/// Ordered list of paths to dump.
///
/// Order is preserved exactly, duplicates included. On disk this is a JSON
/// manifest of the form `{"files": ["a.txt", "b.txt"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList {
    pub files: Vec<String>,
}

impl FileList {
    /// Build a list from caller-supplied paths
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a JSON manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&raw)
            .context(format!("Failed to parse manifest: {}", path.display()))
    }

    /// Render the list as a pretty-printed JSON manifest
    pub fn to_manifest(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

impl Default for FileList {
    fn default() -> Self {
        Self::from_paths(DEFAULT_FILES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_list_order() {
        let list = FileList::default();
        assert_eq!(list.len(), 9);
        assert_eq!(list.files.first().map(String::as_str), Some("board.py"));
        assert_eq!(list.files.last().map(String::as_str), Some("utils.py"));
        assert_eq!(list.iter().collect::<Vec<_>>(), DEFAULT_FILES.to_vec());
    }

    #[test]
    fn test_from_paths_keeps_duplicates() {
        let list = FileList::from_paths(["b", "a", "b"]);
        assert_eq!(list.files, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_load_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"files": ["x.rs", "y.md"]}}"#).unwrap();

        let list = FileList::load(file.path()).unwrap();
        assert_eq!(list.files, vec!["x.rs", "y.md"]);
    }

    #[test]
    fn test_load_malformed_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FileList::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse manifest"));
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileList::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }

    #[test]
    fn test_manifest_reloads_identically() {
        let list = FileList::default();
        let json = list.to_manifest().unwrap();
        let parsed: FileList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }
}
