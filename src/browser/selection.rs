//! Ordered multi-selection and the click-interpretation policy
//!
//! The selection is a duplicate-free list of file paths in the order they
//! were selected, not in tree order. Click handling implements the usual
//! extended-selection semantics of a multi-select list: bare click
//! replaces, ctrl toggles, shift selects a range from the anchor, and
//! ctrl+shift appends a range. Directory entries (and entries disabled by
//! a name filter) never enter the selection; a click on one is rejected
//! and the existing selection survives.

use crate::provider::Entry;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::events::Modifiers;

/// Ordered, duplicate-free selection of file paths
#[derive(Debug, Clone, Default)]
pub struct SelectionList {
    items: Vec<PathBuf>,
    anchor: Option<usize>,
}

impl SelectionList {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected paths, in selection order
    #[must_use]
    pub fn items(&self) -> &[PathBuf] {
        &self.items
    }

    /// Whether `path` is currently selected
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.items.iter().any(|p| p == path)
    }

    /// Replace the selection wholesale; returns whether it changed
    pub(crate) fn replace(&mut self, items: Vec<PathBuf>) -> bool {
        if self.items == items {
            return false;
        }
        self.items = items;
        true
    }

    /// Forget the range anchor (the entry indices it referred to are gone)
    pub(crate) fn reset_anchor(&mut self) {
        self.anchor = None;
    }

    /// Interpret a click on `entries[index]`; returns whether the
    /// selection changed
    pub(crate) fn apply_click(
        &mut self,
        entries: &[Entry],
        index: usize,
        modifiers: Modifiers,
    ) -> bool {
        let Some(entry) = entries.get(index) else {
            return false;
        };
        if entry.is_dir() || !entry.selectable {
            debug!(entry = %entry.path.display(), "selection rejected");
            return false;
        }

        match (modifiers.ctrl, modifiers.shift) {
            // Bare click: the clicked file becomes the whole selection.
            (false, false) => {
                self.anchor = Some(index);
                self.replace(vec![entry.path.clone()])
            }
            // Ctrl: toggle the clicked file in or out.
            (true, false) => {
                self.anchor = Some(index);
                self.toggle(entry.path.clone())
            }
            // Shift: the range from the anchor replaces the selection.
            (false, true) => {
                let range = self.range_files(entries, index);
                self.replace(range)
            }
            // Ctrl+Shift: range files join the selection.
            (true, true) => {
                let mut changed = false;
                for path in self.range_files(entries, index) {
                    if !self.contains(&path) {
                        self.items.push(path);
                        changed = true;
                    }
                }
                changed
            }
        }
    }

    fn toggle(&mut self, path: PathBuf) -> bool {
        if let Some(pos) = self.items.iter().position(|p| *p == path) {
            self.items.remove(pos);
        } else {
            self.items.push(path);
        }
        true
    }

    /// Selectable files between the anchor and `index`, inclusive, in
    /// index order. Without an anchor the range collapses to `index`.
    fn range_files(&self, entries: &[Entry], index: usize) -> Vec<PathBuf> {
        let anchor = self.anchor.unwrap_or(index);
        let (lo, hi) = if anchor <= index {
            (anchor, index)
        } else {
            (index, anchor)
        };
        entries[lo..=hi.min(entries.len() - 1)]
            .iter()
            .filter(|e| !e.is_dir() && e.selectable)
            .map(|e| e.path.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::EntryKind;

    fn file(name: &str) -> Entry {
        Entry {
            path: PathBuf::from(format!("/root/{name}")),
            name: name.to_string(),
            kind: EntryKind::File,
            selectable: true,
        }
    }

    fn dir(name: &str) -> Entry {
        Entry {
            path: PathBuf::from(format!("/root/{name}")),
            name: name.to_string(),
            kind: EntryKind::Directory,
            selectable: false,
        }
    }

    fn paths(selection: &SelectionList) -> Vec<&str> {
        selection
            .items()
            .iter()
            .map(|p| p.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_bare_click_replaces() {
        let entries = vec![file("a"), file("b")];
        let mut selection = SelectionList::new();

        assert!(selection.apply_click(&entries, 0, Modifiers::NONE));
        assert_eq!(paths(&selection), vec!["/root/a"]);

        assert!(selection.apply_click(&entries, 1, Modifiers::NONE));
        assert_eq!(paths(&selection), vec!["/root/b"]);
    }

    #[test]
    fn test_ctrl_click_toggles_in_selection_order() {
        let entries = vec![file("a"), file("b")];
        let mut selection = SelectionList::new();

        selection.apply_click(&entries, 0, Modifiers::NONE);
        selection.apply_click(&entries, 1, Modifiers::CTRL);
        assert_eq!(paths(&selection), vec!["/root/a", "/root/b"]);

        // Toggling a off leaves b alone.
        selection.apply_click(&entries, 0, Modifiers::CTRL);
        assert_eq!(paths(&selection), vec!["/root/b"]);
    }

    #[test]
    fn test_shift_click_selects_range_from_anchor() {
        let entries = vec![file("a"), file("b"), file("c"), file("d")];
        let mut selection = SelectionList::new();

        selection.apply_click(&entries, 1, Modifiers::NONE);
        selection.apply_click(&entries, 3, Modifiers::SHIFT);
        assert_eq!(paths(&selection), vec!["/root/b", "/root/c", "/root/d"]);

        // The anchor survives shift-clicks; shrinking the range works.
        selection.apply_click(&entries, 2, Modifiers::SHIFT);
        assert_eq!(paths(&selection), vec!["/root/b", "/root/c"]);
    }

    #[test]
    fn test_shift_range_skips_directories() {
        let entries = vec![file("a"), dir("sub"), file("c")];
        let mut selection = SelectionList::new();

        selection.apply_click(&entries, 0, Modifiers::NONE);
        selection.apply_click(&entries, 2, Modifiers::SHIFT);
        assert_eq!(paths(&selection), vec!["/root/a", "/root/c"]);
    }

    #[test]
    fn test_ctrl_shift_appends_range() {
        let entries = vec![file("a"), file("b"), file("c"), file("d")];
        let mut selection = SelectionList::new();

        selection.apply_click(&entries, 3, Modifiers::NONE);
        selection.apply_click(&entries, 1, Modifiers::CTRL);
        assert_eq!(paths(&selection), vec!["/root/d", "/root/b"]);

        // Anchor is at b; extend up to c without disturbing order.
        selection.apply_click(&entries, 2, Modifiers::CTRL_SHIFT);
        assert_eq!(paths(&selection), vec!["/root/d", "/root/b", "/root/c"]);
    }

    #[test]
    fn test_directory_click_rejected_selection_survives() {
        let entries = vec![file("a"), dir("sub")];
        let mut selection = SelectionList::new();

        selection.apply_click(&entries, 0, Modifiers::NONE);
        assert!(!selection.apply_click(&entries, 1, Modifiers::NONE));
        assert_eq!(paths(&selection), vec!["/root/a"]);

        assert!(!selection.apply_click(&entries, 1, Modifiers::CTRL));
        assert_eq!(paths(&selection), vec!["/root/a"]);
    }

    #[test]
    fn test_unselectable_file_click_rejected() {
        let mut filtered = file("skip.txt");
        filtered.selectable = false;
        let entries = vec![file("keep.rs"), filtered];
        let mut selection = SelectionList::new();

        assert!(!selection.apply_click(&entries, 1, Modifiers::NONE));
        assert!(selection.items().is_empty());
    }

    #[test]
    fn test_out_of_range_click_is_noop() {
        let entries = vec![file("a")];
        let mut selection = SelectionList::new();
        assert!(!selection.apply_click(&entries, 5, Modifiers::NONE));
    }

    #[test]
    fn test_shift_without_anchor_collapses_to_clicked() {
        let entries = vec![file("a"), file("b")];
        let mut selection = SelectionList::new();
        selection.apply_click(&entries, 1, Modifiers::SHIFT);
        assert_eq!(paths(&selection), vec!["/root/b"]);
    }
}
