//! Testing utilities for filepick
//!
//! This module provides a `TempTree` fixture for building throwaway
//! directory trees that browser and provider tests can enumerate.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree that cleans up on drop
///
/// Relative paths passed to [`dir`](Self::dir) and [`file`](Self::file)
/// are created beneath a unique temporary root, so parallel tests never
/// collide.
///
/// # Examples
/// ```
/// # use filepick::testing::TempTree;
/// let tree = TempTree::new();
/// let sub = tree.dir("projects/filepick");
/// let readme = tree.file("projects/filepick/README.md");
///
/// assert!(sub.is_dir());
/// assert!(readme.is_file());
/// // Everything is removed when `tree` is dropped.
/// ```
pub struct TempTree {
    root: TempDir,
}

impl TempTree {
    /// Create a fresh empty tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temporary directory");
        Self { root }
    }

    /// The root of the tree
    #[must_use]
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create (and return the full path of) a directory
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.root.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create (and return the full path of) a file with default content
    ///
    /// # Panics
    /// Panics if the file cannot be created.
    pub fn file(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.file_with_content(relative, b"test content")
    }

    /// Create (and return the full path of) a file with custom content
    ///
    /// # Panics
    /// Panics if the file cannot be created.
    pub fn file_with_content(&self, relative: impl AsRef<Path>, content: &[u8]) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_creates_files_and_dirs() {
        let tree = TempTree::new();
        let dir = tree.dir("a/b");
        let file = tree.file("a/b/c.txt");

        assert!(dir.is_dir());
        assert!(file.is_file());
        assert_eq!(fs::read(&file).unwrap(), b"test content");
    }

    #[test]
    fn test_tree_cleanup_on_drop() {
        let root;
        {
            let tree = TempTree::new();
            tree.file("keep.txt");
            root = tree.path().to_path_buf();
            assert!(root.exists());
        }
        assert!(!root.exists());
    }

    #[test]
    fn test_trees_do_not_collide() {
        let one = TempTree::new();
        let two = TempTree::new();
        assert_ne!(one.path(), two.path());
    }
}
