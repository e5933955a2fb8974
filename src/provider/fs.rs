//! Real-filesystem entry provider

use super::error::Result;
use super::{Entry, EntryKind, EntryProvider, FilterSettings};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Entry provider backed by `std::fs`
///
/// Enumerates the direct children of the root path, classifies them by
/// following symlinks, and presents directories first, then files, each
/// group sorted by name. Hidden entries (dot-files) are skipped unless
/// `show_hidden` is set. Name filters apply to files only, per
/// [`FilterSettings`].
pub struct FsProvider {
    root: Option<PathBuf>,
    entries: Vec<Entry>,
    show_hidden: bool,
    filters: FilterSettings,
    patterns: Vec<Pattern>,
}

impl FsProvider {
    /// Create a provider that lists everything except hidden entries
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            entries: Vec::new(),
            show_hidden: false,
            filters: FilterSettings::accept_all(),
            patterns: Vec::new(),
        }
    }

    /// Create a provider with hidden-file visibility and name filters
    ///
    /// # Errors
    /// Returns `ProviderError::Pattern` if a filter pattern does not parse.
    pub fn with_options(show_hidden: bool, filters: FilterSettings) -> Result<Self> {
        let patterns = compile_patterns(&filters.patterns)?;
        Ok(Self {
            root: None,
            entries: Vec::new(),
            show_hidden,
            filters,
            patterns,
        })
    }

    /// Replace the name filters and re-enumerate the current root
    ///
    /// # Errors
    /// Returns `ProviderError::Pattern` if a pattern does not parse, or an
    /// enumeration error from re-reading the current root. The previous
    /// filters stay in effect when the new patterns are invalid.
    pub fn apply_filters(&mut self, filters: FilterSettings) -> Result<()> {
        self.patterns = compile_patterns(&filters.patterns)?;
        self.filters = filters;
        if let Some(root) = self.root.clone() {
            self.set_root_for_enumeration(&root)?;
        }
        Ok(())
    }

    /// The currently applied filter settings
    #[must_use]
    pub const fn filters(&self) -> &FilterSettings {
        &self.filters
    }

    fn matches_filters(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for FsProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns.iter().map(|p| Ok(Pattern::new(p)?)).collect()
}

impl EntryProvider for FsProvider {
    fn set_root_for_enumeration(&mut self, path: &Path) -> Result<()> {
        self.root = Some(path.to_path_buf());
        self.entries.clear();

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for dir_entry in fs::read_dir(path)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }

            let entry_path = dir_entry.path();
            // Follow symlinks so a link to a directory navigates like one.
            let is_dir = fs::metadata(&entry_path).map(|m| m.is_dir()).unwrap_or(false);
            if is_dir {
                dirs.push(Entry {
                    path: entry_path,
                    name,
                    kind: EntryKind::Directory,
                    selectable: false,
                });
            } else {
                let matches = self.matches_filters(&name);
                if !matches && self.filters.hide_filtered {
                    continue;
                }
                files.push(Entry {
                    path: entry_path,
                    name,
                    kind: EntryKind::File,
                    selectable: matches,
                });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries = dirs;
        self.entries.append(&mut files);
        Ok(())
    }

    fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn display_path(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

impl std::fmt::Debug for FsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsProvider")
            .field("root", &self.root)
            .field("entries", &self.entries.len())
            .field("show_hidden", &self.show_hidden)
            .field("filters", &self.filters)
            .finish()
    }
}
