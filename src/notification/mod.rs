//! Completion alerts for FocusFlow.
//!
//! This module provides:
//!
//! - [`NotificationGate`]: decides which alerts a completion triggers
//! - [`Notice`]: title and body of a system notification
//! - [`DesktopNotifier`]: desktop notifications through notify-rust
//! - [`MockNotificationSender`]: a recording sender for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use focusflow::notification::{DesktopNotifier, NotificationGate, NotificationSender};
//! use focusflow::types::{CompletionEvent, Mode};
//!
//! let sender: Arc<dyn NotificationSender> = Arc::new(DesktopNotifier::new(true));
//! let gate = NotificationGate::new(None, Some(sender));
//!
//! let event = CompletionEvent {
//!     completed_mode: Mode::Focus,
//!     next_mode: Mode::ShortBreak,
//!     completed_focus_sessions: 1,
//! };
//! gate.on_completion(&event, true);
//! ```

mod content;
mod desktop;
pub mod error;
mod gate;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use self::content::{completion_body, completion_title, Notice, APP_NAME};
pub use self::desktop::DesktopNotifier;
pub use self::error::NotificationError;
pub use self::gate::{GateDecision, NotificationGate};

/// Trait for system notification implementations.
pub trait NotificationSender: Send + Sync {
    /// Shows a notice without waiting for the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice could not be handed to the platform.
    fn send(&self, notice: &Notice) -> Result<(), NotificationError>;

    /// Returns true if notifications are permitted.
    fn is_available(&self) -> bool;
}

/// Mock notification sender for testing.
#[derive(Debug)]
pub struct MockNotificationSender {
    notices: Mutex<Vec<Notice>>,
    available: AtomicBool,
    should_fail: AtomicBool,
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn get_notices(&self) -> Vec<Notice> {
        self.lock_notices().clone()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.lock_notices().len()
    }

    pub fn clear_recorded(&self) {
        self.lock_notices().clear();
    }

    fn lock_notices(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSender for MockNotificationSender {
    fn send(&self, notice: &Notice) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.lock_notices().push(notice.clone());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_notification_sender_basic() {
        let mock = MockNotificationSender::new();

        mock.send(&Notice::new("Focus session completed!", "Time for a short break!"))
            .unwrap();
        mock.send(&Notice::new("Short break completed!", "Back to work"))
            .unwrap();

        let notices = mock.get_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "Focus session completed!");
        assert_eq!(notices[1].body, "Back to work");

        mock.clear_recorded();
        assert_eq!(mock.notification_count(), 0);
    }

    #[test]
    fn test_mock_notification_sender_failure() {
        let mock = MockNotificationSender::new();
        mock.set_should_fail(true);

        assert!(mock.send(&Notice::new("t", "b")).is_err());
        assert_eq!(mock.notification_count(), 0);
    }

    #[test]
    fn test_mock_notification_sender_availability() {
        let mock = MockNotificationSender::new();
        assert!(mock.is_available());

        mock.set_available(false);
        assert!(!mock.is_available());
    }
}
