use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// FIFO of pending toasts, stamped with the configured duration.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    /// Creates an empty queue whose toasts last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a toast with the configured duration.
    pub fn push(&mut self, notification: Notification) {
        self.queue
            .push_back(notification.with_duration(self.default_duration));
    }

    /// Queues a new toast at `level`.
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.push(Notification::new(level, message));
    }

    /// Queues a failure toast.
    pub fn failure(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Failure, message);
    }

    /// Removes and returns every queued toast.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queueing_keeps_order() {
        let mut manager = NotificationManager::default();
        manager.failure("Failed to fetch embed");
        manager.notify(NotificationLevel::Info, "Embed added");

        let drained = manager.drain();
        let messages: Vec<_> = drained.iter().map(|n| n.message.as_str()).collect();

        assert_eq!(messages, vec!["Failed to fetch embed", "Embed added"]);
        assert_eq!(drained[0].level, NotificationLevel::Failure);
        assert!(manager.drain().is_empty());
    }

    #[test]
    fn test_push_applies_default_duration() {
        let mut manager = NotificationManager::new(Duration::from_secs(2));
        manager.push(Notification::failure("x").with_duration(Duration::from_secs(9)));

        let drained = manager.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].duration, Duration::from_secs(2));
    }
}
