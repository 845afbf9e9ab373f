//! Error types for the journal crate.

use thiserror::Error;

/// Errors that can occur while ingesting a journal entry.
///
/// Decoding itself never fails (malformed bytes are dropped); these errors
/// only cover locating and reading the entry on disk.
#[derive(Error, Debug)]
pub enum JournalError {
    /// The path has no usable file name to identify the entry by
    #[error("Path has no file name to use as entry name: {path}")]
    InvalidPath { path: String },

    /// The entry file could not be read
    #[error("Failed to read journal entry {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, JournalError>;
