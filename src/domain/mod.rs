//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient user-facing notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{EmbedRecord, EnabledProviders, Message, NormalizedUrl, ProviderUrl};
pub use errors::{FetchError, UnfurlError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{
    EmbedCachePort, EmbedFetcherPort, MessageUpdaterPort, NotificationPort, SettingsPort,
};
