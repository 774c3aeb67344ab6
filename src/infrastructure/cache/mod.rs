//! Embed caching.

mod memory_embed_cache;

pub use memory_embed_cache::{CacheStats, MemoryEmbedCache};
