//! Entry-provider error types

use thiserror::Error;

/// Errors that can occur while enumerating entries
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Represents an I/O error while reading a directory
    #[error("I/O error while reading directory: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid wildcard pattern in the name filter
    #[error("Invalid name filter pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The requested root is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
