//! Unfurl pipeline error types.

use thiserror::Error;

use super::FetchError;

/// Reasons an unfurl attempt ends without committing embeds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum UnfurlError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no embeds found for {url}")]
    EmptyResult { url: String },
}

impl UnfurlError {
    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates empty result error.
    #[must_use]
    pub fn empty(url: impl Into<String>) -> Self {
        Self::EmptyResult { url: url.into() }
    }

    /// Returns whether the attempt is dropped without telling the user.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }

    /// Returns the toast text shown to the user, if any.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl { .. } => None,
            Self::Fetch(_) => Some("Failed to fetch embed"),
            Self::EmptyResult { .. } => Some("No embeds found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(UnfurlError::invalid_url("nope", "relative URL").user_message(), None);
        assert_eq!(
            UnfurlError::from(FetchError::transport("timeout")).user_message(),
            Some("Failed to fetch embed")
        );
        assert_eq!(
            UnfurlError::empty("https://a.com").user_message(),
            Some("No embeds found")
        );
    }

    #[test]
    fn test_only_invalid_url_is_silent() {
        assert!(UnfurlError::invalid_url("nope", "relative URL").is_silent());
        assert!(!UnfurlError::empty("https://a.com").is_silent());
    }
}
