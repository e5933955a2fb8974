//! Hierarchical entry provider abstraction
//!
//! The browser never touches the filesystem directly. It asks an
//! [`EntryProvider`] to enumerate the children of the current root and to
//! classify paths as file or directory. This keeps the navigation and
//! selection logic independent of where entries actually come from:
//!
//! - [`FsProvider`] - real filesystem enumeration via `std::fs`
//! - `MockProvider` (test builds) - predetermined in-memory tree
//!
//! Interaction events refer to entries by index, so the *order* of
//! [`EntryProvider::entries`] is part of the contract: directories first,
//! then files, each group sorted by name.

mod error;
mod fs;

#[cfg(test)]
pub mod mock;

pub use error::ProviderError;
pub use fs::FsProvider;

use std::path::{Path, PathBuf};

/// Classification of a single entry beneath the current root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory - navigable but never selectable
    Directory,
    /// A regular file (or anything that is not a directory)
    File,
}

/// A single child entry of the current root, in presentation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path of the entry
    pub path: PathBuf,
    /// File name component used for display and filter matching
    pub name: String,
    /// File or directory classification at enumeration time
    pub kind: EntryKind,
    /// Whether the entry may enter the selection. Directories are never
    /// selectable; files excluded by a name filter are listed with
    /// `selectable: false` when the filter merely disables them.
    pub selectable: bool,
}

impl Entry {
    /// Whether this entry is a directory
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Name-filter settings applied during enumeration
///
/// Mirrors the two knobs a file-browser widget usually exposes: wildcard
/// patterns restricting which *files* are offered (`*.rs`, `data_*.csv`),
/// and whether non-matching files disappear from the listing or stay
/// visible but unselectable. Directories are never filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSettings {
    /// Wildcard patterns; an empty list matches every file
    pub patterns: Vec<String>,
    /// `true` removes non-matching files from the listing entirely;
    /// `false` keeps them listed with `selectable: false`
    pub hide_filtered: bool,
}

impl FilterSettings {
    /// Filter settings that accept every file
    #[must_use]
    pub const fn accept_all() -> Self {
        Self {
            patterns: Vec::new(),
            hide_filtered: false,
        }
    }
}

/// Trait for hierarchical entry providers
///
/// Implementations enumerate child entries for a root path and answer
/// classification queries about arbitrary paths encountered during
/// interaction handling.
pub trait EntryProvider {
    /// Set the root path and (re-)enumerate its children
    ///
    /// On failure the provider must present an empty entry list rather
    /// than stale entries from the previous root.
    ///
    /// # Errors
    /// Returns `ProviderError` if the children of `path` cannot be
    /// enumerated.
    fn set_root_for_enumeration(&mut self, path: &Path) -> Result<(), ProviderError>;

    /// Child entries of the current root, in presentation order
    fn entries(&self) -> &[Entry];

    /// Whether `path` refers to a directory, as of now
    fn is_directory(&self, path: &Path) -> bool;

    /// Human-readable form of `path` for display surfaces
    fn display_path(&self, path: &Path) -> String;
}
