mod embed_cache_port;
mod embed_fetcher_port;
mod message_updater_port;
mod notification_port;
mod settings_port;

pub use embed_cache_port::EmbedCachePort;
pub use embed_fetcher_port::EmbedFetcherPort;
#[cfg(test)]
pub use embed_fetcher_port::MockEmbedFetcherPort;
pub use message_updater_port::MessageUpdaterPort;
pub use notification_port::NotificationPort;
pub use settings_port::SettingsPort;
