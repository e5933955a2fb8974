//! Root path and back/forward history state
//!
//! The history is deliberately depth 1: a single remembered previous root
//! and a single redo slot. Repeated `go_back` calls therefore bounce
//! between the last two roots instead of walking further back. Widening
//! the slots into a stack would change that observable behavior; keep
//! them as they are.

use std::mem;
use std::path::{Component, Path, PathBuf};

/// Navigation state: current root plus the two history slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    root_path: PathBuf,
    previous_path: Option<PathBuf>,
    next_path: Option<PathBuf>,
}

impl BrowserState {
    /// Create state rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root_path: normalize(root.into()),
            previous_path: None,
            next_path: None,
        }
    }

    /// The current root path
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The remembered previous root, if any
    #[must_use]
    pub fn previous_path(&self) -> Option<&Path> {
        self.previous_path.as_deref()
    }

    /// The redo slot populated by a back-navigation, if any
    #[must_use]
    pub fn next_path(&self) -> Option<&Path> {
        self.next_path.as_deref()
    }

    /// Change the root, remembering the old one in the previous slot
    ///
    /// Returns the new root when the root actually changed, `None` when
    /// `path` already names the current root (trailing separators do not
    /// count as a difference). The redo slot is left alone; only
    /// [`go_back`](Self::go_back) populates it.
    pub fn change_root(&mut self, path: impl Into<PathBuf>) -> Option<&Path> {
        let path = path.into();
        if path == self.root_path {
            return None;
        }
        let path = normalize(path);
        self.previous_path = Some(mem::replace(&mut self.root_path, path));
        Some(&self.root_path)
    }

    /// Navigate to the remembered previous root
    ///
    /// Stores the current root in the redo slot first. No-op when the
    /// previous slot is empty.
    pub fn go_back(&mut self) -> Option<&Path> {
        let previous = self.previous_path.clone()?;
        self.next_path = Some(self.root_path.clone());
        self.change_root(previous)
    }

    /// Revert the most recent back-navigation
    ///
    /// Consumes and clears the redo slot. No-op when it is empty.
    pub fn go_forward(&mut self) -> Option<&Path> {
        let next = self.next_path.take()?;
        self.change_root(next)
    }
}

/// Strip trailing and duplicate separators without touching the meaning
/// of the path; the filesystem root stays as-is.
fn normalize(path: PathBuf) -> PathBuf {
    match path.components().next_back() {
        Some(Component::Normal(_)) => path.components().collect(),
        _ => path,
    }
}
