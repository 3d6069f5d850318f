//! Error types for the command router.

use std::io;
use thiserror::Error;

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Errors that can occur while reading and executing commands.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The command word is not recognized.
    #[error("invalid command: {word}")]
    UnknownCommand {
        /// The unrecognized word, as typed.
        word: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rendering JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouterError {
    /// Creates an unknown command error.
    pub fn unknown_command(word: impl Into<String>) -> Self {
        Self::UnknownCommand { word: word.into() }
    }
}
