//! Navigable selection browser
//!
//! [`FileBrowser`] ties the pieces together: navigation state with its
//! depth-1 back/forward history ([`BrowserState`]), the ordered
//! multi-selection with its click policy ([`SelectionList`]), and an
//! [`EntryProvider`](crate::provider::EntryProvider) enumerating the
//! current root. A presentation surface drives it with raw
//! [`Interaction`] events and subscribes to root-changed /
//! selection-changed notifications.
//!
//! Notifications are delivered synchronously, in the order state changes
//! occur; when a listener runs, the browser already reflects the change
//! it is being told about.
//!
//! # Examples
//!
//! ```no_run
//! use filepick::browser::FileBrowser;
//! use filepick::provider::FsProvider;
//!
//! # fn main() -> Result<(), filepick::FilepickError> {
//! let mut browser = FileBrowser::new(FsProvider::new())?;
//! browser.on_root_changed(|root| println!("now at {}", root.display()));
//! browser.on_selection_changed(|files| println!("{} selected", files.len()));
//!
//! browser.move_up()?;
//! browser.go_back()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod events;
mod selection;
mod state;

pub use error::BrowserError;
pub use events::{Interaction, Modifiers};
pub use selection::SelectionList;
pub use state::BrowserState;

use crate::provider::{Entry, EntryProvider};
use error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type RootListener = Box<dyn FnMut(&Path)>;
type SelectionListener = Box<dyn FnMut(&[PathBuf])>;

/// File browser state machine over an entry provider
///
/// All operations are synchronous and none of them panics on malformed
/// input: navigating back with an empty history slot, committing a
/// nonexistent path, or clicking a directory all degrade to no-ops.
pub struct FileBrowser<P: EntryProvider> {
    provider: P,
    state: BrowserState,
    selection: SelectionList,
    root_listeners: Vec<RootListener>,
    selection_listeners: Vec<SelectionListener>,
}

impl<P: EntryProvider> FileBrowser<P> {
    /// Create a browser rooted at the process working directory
    ///
    /// # Errors
    /// Returns `BrowserError` if the working directory cannot be resolved
    /// or the initial enumeration fails.
    pub fn new(provider: P) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::with_root(provider, cwd)
    }

    /// Create a browser rooted at `root`
    ///
    /// # Errors
    /// Returns `BrowserError` if the initial enumeration of `root` fails.
    pub fn with_root(provider: P, root: impl Into<PathBuf>) -> Result<Self> {
        let mut browser = Self {
            provider,
            state: BrowserState::new(root),
            selection: SelectionList::new(),
            root_listeners: Vec::new(),
            selection_listeners: Vec::new(),
        };
        browser.reload_entries()?;
        Ok(browser)
    }

    /// The current root path
    #[must_use]
    pub fn current_root(&self) -> &Path {
        self.state.root_path()
    }

    /// The current selection, in selection order
    #[must_use]
    pub fn current_selection(&self) -> &[PathBuf] {
        self.selection.items()
    }

    /// Child entries of the current root, in presentation order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.provider.entries()
    }

    /// Whether a back-navigation would change the root
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.state.previous_path().is_some()
    }

    /// Whether a forward-navigation would change the root
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.state.next_path().is_some()
    }

    /// The text an edit field should display for the current root
    #[must_use]
    pub fn display_text(&self) -> String {
        self.provider.display_path(self.state.root_path())
    }

    /// The underlying entry provider
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider, e.g. to change its filters
    ///
    /// Call [`reload_entries`](Self::reload_entries) afterwards if the
    /// change affects what the current root enumerates to.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Subscribe to root changes; called after the root has moved
    pub fn on_root_changed(&mut self, listener: impl FnMut(&Path) + 'static) {
        self.root_listeners.push(Box::new(listener));
    }

    /// Subscribe to selection changes; receives the full new selection
    pub fn on_selection_changed(&mut self, listener: impl FnMut(&[PathBuf]) + 'static) {
        self.selection_listeners.push(Box::new(listener));
    }

    /// Change the displayed root
    ///
    /// No-op when `path` already names the current root. Otherwise the old
    /// root moves into the previous-slot, the provider re-enumerates, and
    /// a root-changed notification fires.
    ///
    /// # Errors
    /// Returns `BrowserError::Provider` if enumerating the new root fails.
    /// The root still changes; the entry list is empty until the next
    /// successful reload.
    pub fn set_root(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let Some(new_root) = self.state.change_root(path).map(Path::to_path_buf) else {
            return Ok(());
        };
        self.after_root_change(new_root)
    }

    /// Navigate to the parent of the current root; no-op at the top
    ///
    /// # Errors
    /// Propagates enumeration failure like [`set_root`](Self::set_root).
    pub fn move_up(&mut self) -> Result<()> {
        match self.state.root_path().parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.set_root(parent)
            }
            None => Ok(()),
        }
    }

    /// Navigate to the current user's home directory
    ///
    /// # Errors
    /// Propagates enumeration failure like [`set_root`](Self::set_root).
    pub fn go_home(&mut self) -> Result<()> {
        match dirs::home_dir() {
            Some(home) => self.set_root(home),
            None => {
                warn!("home directory could not be determined");
                Ok(())
            }
        }
    }

    /// Navigate to the remembered previous root; no-op when there is none
    ///
    /// # Errors
    /// Propagates enumeration failure like [`set_root`](Self::set_root).
    pub fn go_back(&mut self) -> Result<()> {
        let Some(new_root) = self.state.go_back().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.after_root_change(new_root)
    }

    /// Revert the most recent back-navigation; no-op without one
    ///
    /// # Errors
    /// Propagates enumeration failure like [`set_root`](Self::set_root).
    pub fn go_forward(&mut self) -> Result<()> {
        let Some(new_root) = self.state.go_forward().map(Path::to_path_buf) else {
            return Ok(());
        };
        self.after_root_change(new_root)
    }

    /// Replace the selection programmatically
    ///
    /// Duplicates collapse to their first occurrence and paths the
    /// provider classifies as directories are dropped. Always emits a
    /// selection-changed notification with the resulting selection.
    pub fn set_selection(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        let mut deduped: Vec<PathBuf> = Vec::new();
        for path in paths {
            if self.provider.is_directory(&path) {
                debug!(path = %path.display(), "directory dropped from selection");
                continue;
            }
            if !deduped.contains(&path) {
                deduped.push(path);
            }
        }
        self.selection.replace(deduped);
        self.emit_selection_changed();
    }

    /// Interpret a raw interaction event from the presentation surface
    ///
    /// Clicks feed the selection policy; a double-click on a directory
    /// becomes a root change; committed text goes through the existence
    /// check of [`commit_path_text`](Self::commit_path_text).
    ///
    /// # Errors
    /// Returns `BrowserError::Provider` only when the event triggered a
    /// root change whose enumeration failed.
    pub fn handle_interaction(&mut self, event: Interaction) -> Result<()> {
        match event {
            Interaction::Click { index, modifiers } => {
                self.click(index, modifiers);
                Ok(())
            }
            Interaction::DoubleClick { index } => match self.provider.entries().get(index) {
                Some(entry) if entry.is_dir() => {
                    let target = entry.path.clone();
                    self.set_root(target)
                }
                Some(_) => {
                    self.click(index, Modifiers::NONE);
                    Ok(())
                }
                None => Ok(()),
            },
            Interaction::TextCommitted(raw) => self.commit_path_text(&raw).map(|_| ()),
        }
    }

    /// Validate free-form path text and navigate if it exists
    ///
    /// The returned string is what the edit field should display next:
    /// the (possibly new) current root. A nonexistent path leaves the
    /// state untouched, so the caller ends up reverting its text.
    ///
    /// # Errors
    /// Returns `BrowserError::Provider` if the path exists but its
    /// enumeration fails.
    pub fn commit_path_text(&mut self, raw: &str) -> Result<String> {
        let candidate = Path::new(raw.trim());
        if candidate.exists() {
            self.set_root(candidate.to_path_buf())?;
        } else {
            debug!(input = raw, "typed path does not exist, reverting");
        }
        Ok(self.display_text())
    }

    /// Re-enumerate the current root through the provider
    ///
    /// # Errors
    /// Returns `BrowserError::Provider` on enumeration failure; the entry
    /// list is empty afterwards.
    pub fn reload_entries(&mut self) -> Result<()> {
        self.provider
            .set_root_for_enumeration(self.state.root_path())
            .map_err(Into::into)
    }

    fn click(&mut self, index: usize, modifiers: Modifiers) {
        let changed = self
            .selection
            .apply_click(self.provider.entries(), index, modifiers);
        if changed {
            self.emit_selection_changed();
        }
    }

    fn after_root_change(&mut self, new_root: PathBuf) -> Result<()> {
        debug!(root = %new_root.display(), "root changed");
        self.selection.reset_anchor();
        let enumeration = self.provider.set_root_for_enumeration(&new_root);
        if let Err(err) = &enumeration {
            warn!(error = %err, "entry enumeration failed");
        }
        for listener in &mut self.root_listeners {
            listener(&new_root);
        }
        enumeration.map_err(Into::into)
    }

    fn emit_selection_changed(&mut self) {
        let snapshot = self.selection.items().to_vec();
        for listener in &mut self.selection_listeners {
            listener(&snapshot);
        }
    }
}
