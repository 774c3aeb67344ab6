//! Oxiembed - show link previews for URLs Discord did not unfurl.
//!
//! This crate canonicalizes message links, optionally rewrites them to
//! embed-friendly mirrors, fetches embed payloads from the Discord unfurl
//! endpoint, caches them and merges them back into a message's embeds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "oxiembed";
