//! Use case implementations.

mod unfurl_embed_use_case;

pub use unfurl_embed_use_case::UnfurlEmbedUseCase;
