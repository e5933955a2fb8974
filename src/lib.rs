//! Filepick - a toolkit-independent file-selection browser core
//!
//! This library implements the state machine behind a "file browser" widget:
//! a current root directory, a back/forward history of previously visited
//! roots, and an ordered multi-selection of file (non-directory) paths. It
//! owns no rendering: a presentation surface feeds it raw interaction events
//! (clicks with modifiers, double-clicks, committed path text) and listens
//! for root-changed / selection-changed notifications.
//!
//! Directory contents are supplied through the [`provider::EntryProvider`]
//! trait, so the same browser logic runs against the real filesystem
//! ([`provider::FsProvider`]) or an in-memory tree in tests.

use thiserror::Error;

pub mod browser;
pub mod config;
pub mod provider;

#[cfg(test)]
pub mod testing;

pub use browser::{FileBrowser, Interaction, Modifiers};
pub use provider::{Entry, EntryKind, EntryProvider};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FilepickError {
    /// Browser error
    #[error("Browser error: {0}")]
    BrowserError(#[from] browser::BrowserError),
    /// Entry provider error
    #[error("Entry provider error: {0}")]
    ProviderError(#[from] provider::ProviderError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
