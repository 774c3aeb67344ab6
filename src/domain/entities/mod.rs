//! Domain entity definitions.

mod embed;
mod link;
mod message;
mod provider;
mod token;

pub use embed::EmbedRecord;
pub use link::{NormalizedUrl, ProviderUrl};
pub use message::{Attachment, ChannelId, Message, MessageId};
pub use provider::{EmbedProvider, EnabledProviders};
pub use token::ApiToken;
