//! Domain error types.

mod fetch_error;
mod unfurl_error;

pub use fetch_error::FetchError;
pub use unfurl_error::UnfurlError;
