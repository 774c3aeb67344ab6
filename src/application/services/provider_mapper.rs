use tracing::trace;
use url::Url;

use crate::domain::entities::{EnabledProviders, NormalizedUrl, ProviderUrl};
use crate::domain::errors::UnfurlError;

/// Rewrites links to embed-friendly mirror domains.
pub struct ProviderMapper;

impl ProviderMapper {
    /// Swaps the source domain for its mirror when that mirror is enabled and
    /// the host is exactly the source domain, with or without `www.`.
    ///
    /// Mirror hosts never match a source domain, so mapping twice is a no-op.
    ///
    /// # Errors
    /// Returns [`UnfurlError::InvalidUrl`] if `url` cannot be parsed.
    pub fn map_to_provider(
        url: &NormalizedUrl,
        enabled: EnabledProviders,
    ) -> Result<ProviderUrl, UnfurlError> {
        let parsed =
            Url::parse(url.as_str()).map_err(|e| UnfurlError::invalid_url(url.as_str(), e))?;
        let host = parsed.host_str().unwrap_or_default();

        let provider = enabled
            .iter_enabled()
            .find(|provider| provider.matches_host(host));

        let Some(provider) = provider else {
            return Ok(ProviderUrl::from(url.clone()));
        };

        let mapped = url
            .as_str()
            .replacen(provider.source_domain(), provider.mirror_domain(), 1);

        trace!(%provider, from = %url, to = %mapped, "Mapped URL to mirror provider");

        Ok(ProviderUrl::new(mapped))
    }
}
