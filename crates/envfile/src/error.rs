//! Error types for reading, building and writing dotenv documents.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for envfile operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors produced while loading, assembling or saving a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file (or its temporary sibling) could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Two groups were given the same key.
    #[error("duplicate group key `{0}`")]
    DuplicateGroup(String),
}
