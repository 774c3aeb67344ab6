//! Discord API client.

mod client;
mod dto;

pub use client::{DiscordUnfurlClient, UNFURL_EMBED_URLS};
