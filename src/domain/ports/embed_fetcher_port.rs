//! Unfurl service port definition.

use async_trait::async_trait;

use crate::domain::entities::{EmbedRecord, ProviderUrl};
use crate::domain::errors::FetchError;

/// Port for requesting embed payloads for a single URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbedFetcherPort: Send + Sync {
    /// Issues exactly one request for `url`.
    ///
    /// An empty list is a valid answer, not an error.
    async fn fetch(&self, url: &ProviderUrl) -> Result<Vec<EmbedRecord>, FetchError>;
}
