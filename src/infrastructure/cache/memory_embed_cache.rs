//! In-memory embed cache implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::trace;

use crate::domain::entities::{EmbedRecord, ProviderUrl};
use crate::domain::ports::EmbedCachePort;

/// Unbounded embed cache that lives as long as the process.
/// Lookups hand out copies, so callers can never mutate a cached entry.
#[derive(Default)]
pub struct MemoryEmbedCache {
    entries: RwLock<HashMap<ProviderUrl, Vec<EmbedRecord>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryEmbedCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: self.len(),
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached URLs.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} URLs, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

impl EmbedCachePort for MemoryEmbedCache {
    fn lookup(&self, url: &ProviderUrl) -> Option<Vec<EmbedRecord>> {
        let entries = self.entries.read();
        if let Some(embeds) = entries.get(url) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(%url, "Embed cache hit");
            Some(embeds.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(%url, "Embed cache miss");
            None
        }
    }

    fn store(&self, url: ProviderUrl, embeds: Vec<EmbedRecord>) {
        trace!(%url, count = embeds.len(), "Caching embeds");
        self.entries.write().insert(url, embeds);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}
