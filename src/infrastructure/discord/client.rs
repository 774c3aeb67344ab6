//! Discord unfurl HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, UnfurlRequest, UnfurlResponse};
use crate::domain::entities::{ApiToken, EmbedRecord, ProviderUrl};
use crate::domain::errors::FetchError;
use crate::domain::ports::EmbedFetcherPort;

const DISCORD_API_BASE: &str = "https://discord.com/api/v9";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the endpoint that turns URLs into embeds.
pub const UNFURL_EMBED_URLS: &str = "/unfurler/embed-urls";

/// Client for the Discord unfurl endpoint.
pub struct DiscordUnfurlClient {
    client: Client,
    base_url: String,
    token: Option<ApiToken>,
}

impl DiscordUnfurlClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(token: Option<ApiToken>) -> Result<Self, FetchError> {
        Self::with_base_url(DISCORD_API_BASE, token, DEFAULT_TIMEOUT)
    }

    /// Creates client with custom base URL and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<ApiToken>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> FetchError {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED => FetchError::transport("invalid or expired token"),
            StatusCode::TOO_MANY_REQUESTS => {
                FetchError::transport(format!("rate limited: {error_message}"))
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                FetchError::transport("Discord API is temporarily unavailable")
            }
            _ => FetchError::transport(format!("unexpected response: {status} - {error_message}")),
        }
    }
}

#[async_trait]
impl EmbedFetcherPort for DiscordUnfurlClient {
    async fn fetch(&self, url: &ProviderUrl) -> Result<Vec<EmbedRecord>, FetchError> {
        let endpoint = format!("{}{UNFURL_EMBED_URLS}", self.base_url);

        debug!(%url, "Unfurling URL");

        let mut request = self.client.post(&endpoint).json(&UnfurlRequest {
            urls: [url.as_str()],
        });
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, token.as_str());
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to connect to Discord API");
            if e.is_timeout() {
                FetchError::transport("request timed out")
            } else if e.is_connect() {
                FetchError::transport("failed to connect to Discord")
            } else {
                FetchError::transport(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body: UnfurlResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse unfurl response");
            FetchError::transport(format!("failed to parse response: {e}"))
        })?;

        let embeds = body.embeds.unwrap_or_default();

        debug!(%url, count = embeds.len(), "Unfurl response received");

        Ok(embeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DiscordUnfurlClient::new(None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            DiscordUnfurlClient::with_base_url("http://localhost/api/", None, DEFAULT_TIMEOUT)
                .unwrap();
        assert_eq!(client.base_url, "http://localhost/api");
    }
}
