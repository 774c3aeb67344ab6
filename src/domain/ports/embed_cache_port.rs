//! Port definition for embed caching.

use crate::domain::entities::{EmbedRecord, ProviderUrl};

/// Process-lifetime store of fetched embeds keyed by provider URL.
/// Implementations must be thread-safe; concurrent stores for one key resolve
/// to the last write.
pub trait EmbedCachePort: Send + Sync {
    /// Returns a copy of the embeds stored for `url`.
    fn lookup(&self, url: &ProviderUrl) -> Option<Vec<EmbedRecord>>;

    /// Stores `embeds` for `url`, replacing any previous entry.
    fn store(&self, url: ProviderUrl, embeds: Vec<EmbedRecord>);

    /// Returns the number of cached URLs.
    fn len(&self) -> usize;

    /// Returns true if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    fn clear(&self);
}
