use crate::domain::Notification;

/// Port for transient user-visible toasts.
pub trait NotificationPort: Send + Sync {
    /// Shows a toast.
    fn notify(&self, notification: Notification);
}
