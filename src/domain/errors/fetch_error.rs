//! Unfurl request error types.

use thiserror::Error;

/// Failure talking to the unfurl service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("failed to reach unfurl service: {message}")]
    Transport { message: String },
}

impl FetchError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
