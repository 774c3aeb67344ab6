//! Data transfer objects.

mod unfurl_dto;

pub use unfurl_dto::{MenuTrigger, UnfurlTarget};
