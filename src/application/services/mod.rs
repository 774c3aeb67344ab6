mod embed_merger;
mod notification_manager;
mod provider_mapper;
mod url_normalizer;

pub use embed_merger::EmbedMerger;
pub use notification_manager::NotificationManager;
pub use provider_mapper::ProviderMapper;
pub use url_normalizer::UrlNormalizer;
