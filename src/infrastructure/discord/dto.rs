use serde::{Deserialize, Serialize};

use crate::domain::entities::EmbedRecord;

/// Unfurl request body.
#[derive(Debug, Serialize)]
pub struct UnfurlRequest<'a> {
    /// URLs to unfurl; always exactly one.
    pub urls: [&'a str; 1],
}

/// Unfurl response body. `embeds` may be absent or null.
#[derive(Debug, Deserialize)]
pub struct UnfurlResponse {
    /// Embeds the service produced.
    #[serde(default)]
    pub embeds: Option<Vec<EmbedRecord>>,
}

/// Discord API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from Discord.
    pub message: String,
}
