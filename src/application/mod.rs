//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Pure link and embed services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{MenuTrigger, UnfurlTarget};
pub use use_cases::UnfurlEmbedUseCase;
