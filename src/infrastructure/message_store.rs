//! Host message state.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::{ChannelId, EmbedRecord, MessageId};
use crate::domain::ports::MessageUpdaterPort;

/// Keeps the latest committed embed list per message.
#[derive(Default)]
pub struct InMemoryMessageStore {
    embeds: RwLock<HashMap<(ChannelId, MessageId), Vec<EmbedRecord>>>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the embeds last committed for a message.
    #[must_use]
    pub fn embeds(&self, channel_id: ChannelId, message_id: MessageId) -> Option<Vec<EmbedRecord>> {
        self.embeds.read().get(&(channel_id, message_id)).cloned()
    }
}

impl MessageUpdaterPort for InMemoryMessageStore {
    fn update_embeds(&self, channel_id: ChannelId, message_id: MessageId, embeds: Vec<EmbedRecord>) {
        debug!(%channel_id, %message_id, count = embeds.len(), "Message embeds updated");
        self.embeds.write().insert((channel_id, message_id), embeds);
    }
}
