//! Unfurl embed use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use url::Url;

use crate::application::dto::{MenuTrigger, UnfurlTarget};
use crate::application::services::{EmbedMerger, ProviderMapper, UrlNormalizer};
use crate::domain::entities::{EmbedRecord, Message, ProviderUrl};
use crate::domain::errors::UnfurlError;
use crate::domain::ports::{
    EmbedCachePort, EmbedFetcherPort, MessageUpdaterPort, NotificationPort, SettingsPort,
};
use crate::domain::Notification;

/// Fetches and attaches a link preview the host did not produce itself.
#[derive(Clone)]
pub struct UnfurlEmbedUseCase {
    fetcher: Arc<dyn EmbedFetcherPort>,
    cache: Arc<dyn EmbedCachePort>,
    updater: Arc<dyn MessageUpdaterPort>,
    notifier: Arc<dyn NotificationPort>,
    settings: Arc<dyn SettingsPort>,
}

impl UnfurlEmbedUseCase {
    /// Creates new unfurl use case.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn EmbedFetcherPort>,
        cache: Arc<dyn EmbedCachePort>,
        updater: Arc<dyn MessageUpdaterPort>,
        notifier: Arc<dyn NotificationPort>,
        settings: Arc<dyn SettingsPort>,
    ) -> Self {
        Self {
            fetcher,
            cache,
            updater,
            notifier,
            settings,
        }
    }

    /// Decides whether the "Show Embed" item belongs in the menu.
    ///
    /// Attachments, non-links, unparseable links and links the message
    /// already shows as an embed or attachment get no item.
    #[must_use]
    pub fn prepare(&self, trigger: &MenuTrigger) -> Option<UnfurlTarget> {
        if trigger.is_attachment {
            return None;
        }
        let href = trigger.href.as_deref()?;

        let original_url = UrlNormalizer::normalize(href)
            .inspect_err(|e| debug!(error = %e, "Ignoring link that is not a URL"))
            .ok()?;
        let provider_url =
            ProviderMapper::map_to_provider(&original_url, self.settings.enabled_providers())
                .inspect_err(|e| debug!(error = %e, "Ignoring link that is not a URL"))
                .ok()?;

        let message = &trigger.message;
        if message.contains_embed_for_url(provider_url.as_str())
            || message.contains_attachment_for_url(provider_url.as_str())
        {
            debug!(url = %provider_url, "Message already shows this link");
            return None;
        }

        Some(UnfurlTarget::new(original_url, provider_url))
    }

    /// Resolves embeds for `target` and commits them to `message`.
    ///
    /// Returns the embed list handed to the host.
    ///
    /// # Errors
    /// Returns error if the URL is unparseable, the request fails, or the
    /// service found nothing. The user has already been notified where
    /// appropriate.
    pub async fn execute(
        &self,
        target: &UnfurlTarget,
        message: &Message,
    ) -> Result<Vec<EmbedRecord>, UnfurlError> {
        let fetched = if let Some(embeds) = self.cache.lookup(&target.provider_url) {
            debug!(url = %target.provider_url, count = embeds.len(), "Embed cache hit");
            embeds
        } else {
            self.fetch_and_cache(&target.provider_url)
                .await
                .inspect_err(|e| self.report(e))?
        };

        let merged = EmbedMerger::merge(
            message.embeds().to_vec(),
            fetched,
            target.original_url.as_str(),
            message.content(),
        );

        info!(
            channel_id = %message.channel_id(),
            message_id = %message.id(),
            url = %target.provider_url,
            embeds = merged.len(),
            "Updating message embeds"
        );

        self.updater
            .update_embeds(message.channel_id(), message.id(), merged.clone());

        Ok(merged)
    }

    /// Runs the whole flow for a menu trigger.
    ///
    /// Returns `Ok(None)` when the menu item would not have been offered.
    ///
    /// # Errors
    /// See [`Self::execute`].
    pub async fn run(&self, trigger: &MenuTrigger) -> Result<Option<Vec<EmbedRecord>>, UnfurlError> {
        let Some(target) = self.prepare(trigger) else {
            return Ok(None);
        };

        self.execute(&target, &trigger.message).await.map(Some)
    }

    async fn fetch_and_cache(&self, url: &ProviderUrl) -> Result<Vec<EmbedRecord>, UnfurlError> {
        Url::parse(url.as_str()).map_err(|e| UnfurlError::invalid_url(url.as_str(), e))?;

        debug!(%url, "Requesting embeds from unfurl service");

        let embeds = self.fetcher.fetch(url).await?;

        if embeds.is_empty() {
            return Err(UnfurlError::empty(url.as_str()));
        }

        self.cache.store(url.clone(), embeds.clone());

        Ok(embeds)
    }

    fn report(&self, err: &UnfurlError) {
        match err {
            UnfurlError::InvalidUrl { .. } => {
                debug!(error = %err, "Skipping unparseable provider URL");
            }
            UnfurlError::Fetch(_) => error!(error = %err, "Failed to fetch embed"),
            UnfurlError::EmptyResult { .. } => warn!(error = %err, "No embeds found"),
        }

        if let Some(message) = err.user_message() {
            self.notifier.notify(Notification::failure(message));
        }
    }
}
