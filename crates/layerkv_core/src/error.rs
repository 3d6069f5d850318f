//! Error types for LayerKV core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in LayerKV core operations.
///
/// The engine itself never enters a fatal state. These errors exist for
/// callers that want `?`-style handling of the few recoverable conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A value could not be parsed as a signed 64-bit integer.
    #[error("invalid value: {input:?} is not a 64-bit signed integer")]
    InvalidValue {
        /// The text that failed to parse.
        input: String,
    },

    /// Rollback was requested with no open transaction.
    #[error("no active transaction")]
    NoTransaction,
}

impl CoreError {
    /// Creates an invalid value error.
    pub fn invalid_value(input: impl Into<String>) -> Self {
        Self::InvalidValue {
            input: input.into(),
        }
    }
}
