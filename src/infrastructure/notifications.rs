//! In-app toast notifications.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::services::NotificationManager;
use crate::domain::ports::NotificationPort;
use crate::domain::{Notification, NotificationLevel};

/// Toast sink that queues notifications for display and mirrors them to the log.
#[derive(Clone)]
pub struct ToastService {
    enabled: bool,
    manager: Arc<Mutex<NotificationManager>>,
}

impl ToastService {
    /// Wraps `manager`. When `enabled` is false toasts are only logged.
    #[must_use]
    pub fn new(enabled: bool, manager: NotificationManager) -> Self {
        Self {
            enabled,
            manager: Arc::new(Mutex::new(manager)),
        }
    }

    /// Removes and returns every pending toast.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.manager.lock().drain()
    }
}

impl NotificationPort for ToastService {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => tracing::info!(toast = %notification.message, "Toast"),
            NotificationLevel::Failure => tracing::warn!(toast = %notification.message, "Toast"),
        }

        if !self.enabled {
            return;
        }

        self.manager.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_are_queued() {
        let toasts = ToastService::new(true, NotificationManager::default());

        toasts.notify(Notification::failure("Failed to fetch embed"));
        toasts.notify(Notification::failure("No embeds found"));

        let drained: Vec<_> = toasts.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(drained, vec!["Failed to fetch embed", "No embeds found"]);
        assert!(toasts.drain().is_empty());
    }

    #[test]
    fn test_disabled_toasts_are_dropped() {
        let toasts = ToastService::new(false, NotificationManager::default());

        toasts.notify(Notification::failure("No embeds found"));

        assert!(toasts.drain().is_empty());
    }
}
