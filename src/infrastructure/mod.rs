//! Infrastructure layer with external service adapters.

/// Embed caching.
pub mod cache;
/// Application configuration.
pub mod config;
/// Discord API client.
pub mod discord;
/// Host message state.
pub mod message_store;
/// In-app toast notifications.
pub mod notifications;
/// Runtime-editable user settings.
pub mod settings_store;

pub use cache::{CacheStats, MemoryEmbedCache};
pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use discord::DiscordUnfurlClient;
pub use message_store::InMemoryMessageStore;
pub use notifications::ToastService;
pub use settings_store::SettingsStore;
