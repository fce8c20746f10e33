//! Error handling for the dotenv-manager binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for dotenv-manager operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors (terminal setup, log file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The edited file could not be read or written.
    #[error(transparent)]
    File(#[from] envfile::Error),
    /// The settings file could not be read or parsed.
    #[error("settings error in {}: {message}", path.display())]
    Settings {
        /// Settings file.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    /// A theme color did not parse.
    #[error("invalid color `{value}` for theme.{field}")]
    Color {
        /// Theme field name.
        field: &'static str,
        /// Rejected value.
        value: String,
    },
    /// The file watcher could not be started.
    #[error("file watch error: {0}")]
    Watch(#[from] notify::Error),
}
