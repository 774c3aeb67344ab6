use std::time::Duration;

use uuid::Uuid;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational message.
    Info,
    /// An unfurl failed.
    Failure,
}

/// Transient toast shown to the user. Carries no actions.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Fresh id per toast.
    pub id: Uuid,
    /// Severity.
    pub level: NotificationLevel,
    /// Text shown to the user.
    pub message: String,
    /// How long a front end keeps the toast on screen.
    pub duration: Duration,
}

impl Notification {
    /// Creates a toast with the default five second duration.
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            duration: Duration::from_secs(5),
        }
    }

    /// Creates a failure toast.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Failure, message)
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
