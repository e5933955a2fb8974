//! Mock entry provider for testing

use super::error::{ProviderError, Result};
use super::{Entry, EntryKind, EntryProvider, FilterSettings};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// In-memory entry provider with a predetermined directory tree
///
/// Useful for exercising browser logic without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    entries: Vec<Entry>,
    filters: FilterSettings,
    /// When set, the next enumeration fails with `NotADirectory`
    pub fail_next_enumeration: bool,
}

impl MockProvider {
    /// Create an empty mock tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (and make it classify as one)
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Register a file beneath some registered directory
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Apply name filters the way `FsProvider` would
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSettings) -> Self {
        self.filters = filters;
        self
    }

    fn matches_filters(&self, name: &str) -> bool {
        self.filters.patterns.is_empty()
            || self
                .filters
                .patterns
                .iter()
                .filter_map(|p| glob::Pattern::new(p).ok())
                .any(|p| p.matches(name))
    }
}

impl EntryProvider for MockProvider {
    fn set_root_for_enumeration(&mut self, path: &Path) -> Result<()> {
        self.entries.clear();
        if self.fail_next_enumeration {
            self.fail_next_enumeration = false;
            return Err(ProviderError::NotADirectory(path.display().to_string()));
        }

        let children = |set: &BTreeSet<PathBuf>| -> Vec<PathBuf> {
            set.iter()
                .filter(|p| p.parent() == Some(path))
                .cloned()
                .collect()
        };

        for dir in children(&self.dirs) {
            self.entries.push(Entry {
                name: file_name(&dir),
                path: dir,
                kind: EntryKind::Directory,
                selectable: false,
            });
        }
        for file in children(&self.files) {
            let name = file_name(&file);
            let matches = self.matches_filters(&name);
            if !matches && self.filters.hide_filtered {
                continue;
            }
            self.entries.push(Entry {
                name,
                path: file,
                kind: EntryKind::File,
                selectable: matches,
            });
        }
        Ok(())
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn display_path(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_enumerates_direct_children_only() {
        let mut provider = MockProvider::new()
            .with_dir("/root")
            .with_dir("/root/sub")
            .with_file("/root/a.txt")
            .with_file("/root/sub/nested.txt");

        provider.set_root_for_enumeration(Path::new("/root")).unwrap();
        let names: Vec<_> = provider.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "a.txt"]);
    }

    #[test]
    fn test_mock_classifies_paths() {
        let provider = MockProvider::new()
            .with_dir("/root")
            .with_file("/root/a.txt");

        assert!(provider.is_directory(Path::new("/root")));
        assert!(!provider.is_directory(Path::new("/root/a.txt")));
        assert!(!provider.is_directory(Path::new("/elsewhere")));
    }

    #[test]
    fn test_mock_enumeration_failure() {
        let mut provider = MockProvider::new().with_dir("/root");
        provider.fail_next_enumeration = true;

        assert!(provider.set_root_for_enumeration(Path::new("/root")).is_err());
        assert!(provider.entries().is_empty());

        // One-shot: the following enumeration succeeds again.
        provider.set_root_for_enumeration(Path::new("/root")).unwrap();
    }
}
