//! Notification system error types.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The desktop notification service rejected or failed the request.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// Notifications are disabled or no notification service is reachable.
    #[error("notifications are not available")]
    NotAvailable,

    /// The background thread showing the notification could not be started.
    #[error("failed to start notification thread: {0}")]
    ThreadFailed(String),
}

impl NotificationError {
    /// Returns true if retrying later cannot succeed.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::NotAvailable)
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => "Check that a notification daemon is running",
            Self::NotAvailable => "Run without --no-notify to enable notifications",
            Self::ThreadFailed(_) => "Restart the application",
        }
    }
}
