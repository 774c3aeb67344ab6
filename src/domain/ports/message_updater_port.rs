use crate::domain::entities::{ChannelId, EmbedRecord, MessageId};

/// Port for committing a replacement embed list to the host's message state.
pub trait MessageUpdaterPort: Send + Sync {
    /// Replaces the message's embeds. Fire-and-forget.
    fn update_embeds(&self, channel_id: ChannelId, message_id: MessageId, embeds: Vec<EmbedRecord>);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockMessageUpdater {
        pub updates: Arc<Mutex<Vec<(ChannelId, MessageId, Vec<EmbedRecord>)>>>,
    }

    impl MockMessageUpdater {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<Vec<EmbedRecord>> {
            self.updates.lock().unwrap().last().map(|(_, _, e)| e.clone())
        }

        pub fn count(&self) -> usize {
            self.updates.lock().unwrap().len()
        }
    }

    impl MessageUpdaterPort for MockMessageUpdater {
        fn update_embeds(
            &self,
            channel_id: ChannelId,
            message_id: MessageId,
            embeds: Vec<EmbedRecord>,
        ) {
            self.updates
                .lock()
                .unwrap()
                .push((channel_id, message_id, embeds));
        }
    }
}
