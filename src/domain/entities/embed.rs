//! Link preview payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Link preview attached to a message.
///
/// Only `url` is interpreted; every other field the unfurl service returns
/// (title, thumbnail, provider, video...) is carried through untouched so it
/// round-trips back to the host exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl EmbedRecord {
    /// Creates an embed for the given URL with no extra fields.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            fields: Map::new(),
        }
    }

    /// Adds a provider-specific field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the URL this embed previews, if the payload carried one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns true if this embed previews exactly `url`.
    #[must_use]
    pub fn is_for(&self, url: &str) -> bool {
        self.url.as_deref() == Some(url)
    }

    /// Returns a provider-specific field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all provider-specific fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({
            "type": "video",
            "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "thumbnail": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq.jpg", "width": 480 }
        });

        let embed: EmbedRecord = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(embed.url(), Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(embed.field("title"), Some(&json!("Never Gonna Give You Up")));
        assert_eq!(serde_json::to_value(&embed).unwrap(), raw);
    }

    #[test]
    fn test_missing_url() {
        let embed: EmbedRecord = serde_json::from_value(json!({ "type": "rich" })).unwrap();

        assert_eq!(embed.url(), None);
        assert!(!embed.is_for(""));
        assert!(!serde_json::to_string(&embed).unwrap().contains("url"));
    }
}
