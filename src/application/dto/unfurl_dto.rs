//! Unfurl DTOs.

use crate::domain::entities::{Message, NormalizedUrl, ProviderUrl};

/// Right-click on a message: what was clicked and where.
#[derive(Debug, Clone)]
pub struct MenuTrigger {
    /// Message the menu was opened on.
    pub message: Message,
    /// Link under the cursor, if any.
    pub href: Option<String>,
    /// Whether the link belongs to an attachment.
    pub is_attachment: bool,
}

impl MenuTrigger {
    /// Creates trigger for a plain link.
    #[must_use]
    pub fn new(message: Message, href: impl Into<String>) -> Self {
        Self {
            message,
            href: Some(href.into()),
            is_attachment: false,
        }
    }

    /// Marks the clicked link as an attachment.
    #[must_use]
    pub const fn on_attachment(mut self) -> Self {
        self.is_attachment = true;
        self
    }
}

/// Link eligible for the "Show Embed" menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfurlTarget {
    /// Canonical form of the clicked link.
    pub original_url: NormalizedUrl,
    /// URL actually sent to the unfurl service and used as cache key.
    pub provider_url: ProviderUrl,
}

impl UnfurlTarget {
    /// Menu item identifier.
    pub const MENU_ID: &'static str = "unfurl-url";
    /// Menu item label.
    pub const MENU_LABEL: &'static str = "Show Embed";

    /// Creates new target.
    #[must_use]
    pub const fn new(original_url: NormalizedUrl, provider_url: ProviderUrl) -> Self {
        Self {
            original_url,
            provider_url,
        }
    }
}
