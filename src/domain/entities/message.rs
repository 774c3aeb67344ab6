use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::EmbedRecord;

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);

        impl $name {
            /// Returns the underlying u64 value.
            #[must_use]
            pub const fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        // Discord sends snowflakes as strings; accept bare numbers too.
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Str(String),
                    Num(u64),
                }

                match Raw::deserialize(deserializer)? {
                    Raw::Num(value) => Ok(Self(value)),
                    Raw::Str(value) => value.parse().map(Self).map_err(serde::de::Error::custom),
                }
            }
        }
    };
}

snowflake!(
    /// Unique identifier for a Discord message.
    MessageId
);
snowflake!(
    /// Unique identifier for a Discord channel.
    ChannelId
);

/// Discord message attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Attachment {
    #[serde(default)]
    id: String,
    #[serde(default)]
    filename: String,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
}

#[allow(missing_docs)]
impl Attachment {
    #[must_use]
    pub fn new(id: impl Into<String>, filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            url: url.into(),
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Snapshot of a host-owned message: the fields unfurling reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Message {
    id: MessageId,
    channel_id: ChannelId,
    #[serde(default)]
    content: String,
    #[serde(default)]
    embeds: Vec<EmbedRecord>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

#[allow(missing_docs)]
impl Message {
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        channel_id: impl Into<ChannelId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            content: content.into(),
            embeds: Vec::new(),
            attachments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_embeds(mut self, embeds: Vec<EmbedRecord>) -> Self {
        self.embeds = embeds;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn embeds(&self) -> &[EmbedRecord] {
        &self.embeds
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns true if any existing embed previews exactly `url`.
    #[must_use]
    pub fn contains_embed_for_url(&self, url: &str) -> bool {
        self.embeds.iter().any(|embed| embed.is_for(url))
    }

    /// Returns true if any attachment is served from exactly `url`.
    #[must_use]
    pub fn contains_attachment_for_url(&self, url: &str) -> bool {
        self.attachments.iter().any(|attachment| attachment.url == url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_discord_json() {
        let json = r#"{
            "id": "1187654321098765432",
            "channel_id": "1100000000000000001",
            "content": "look https://twitter.com/a/status/1",
            "embeds": [{ "url": "https://example.com", "title": "Example" }],
            "attachments": [{ "id": "9", "filename": "a.png", "url": "https://cdn.discordapp.com/a.png" }]
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.id().as_u64(), 1_187_654_321_098_765_432);
        assert_eq!(message.channel_id(), ChannelId(1_100_000_000_000_000_001));
        assert!(message.contains_embed_for_url("https://example.com"));
        assert!(message.contains_attachment_for_url("https://cdn.discordapp.com/a.png"));
        assert!(!message.contains_embed_for_url("https://twitter.com/a/status/1"));
    }

    #[test]
    fn test_snowflake_serializes_as_string() {
        let message = Message::new(42_u64, 7_u64, "");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["id"], "42");
        assert_eq!(value["channel_id"], "7");
    }

    #[test]
    fn test_numeric_snowflake_accepted() {
        let message: Message = serde_json::from_str(r#"{"id": 1, "channel_id": 2}"#).unwrap();

        assert_eq!(message.id(), MessageId(1));
        assert!(message.embeds().is_empty());
        assert!(message.attachments().is_empty());
        assert_eq!(message.content(), "");
    }
}
