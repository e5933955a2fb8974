//! Browser error types
//!
//! Navigation misuse (back with an empty slot, a nonexistent typed path,
//! a click on a directory) is never an error; those paths degrade to
//! no-ops. The variants here cover the genuinely failable parts: entry
//! enumeration I/O and resolving the process working directory.

use thiserror::Error;

/// Errors that can occur while operating the browser
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Entry provider failure while (re-)enumerating the root
    #[error("Entry provider error: {0}")]
    Provider(#[from] crate::provider::ProviderError),

    /// The process working directory could not be resolved
    #[error("Could not determine working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

/// Result type for browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;
