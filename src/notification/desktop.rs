//! Desktop notifications via notify-rust.
//!
//! Showing a notification can block on the session bus, so each notice is
//! shown from its own short-lived thread and the caller never waits.

use std::thread;

use notify_rust::Notification;
use tracing::{debug, warn};

use super::content::{Notice, APP_NAME};
use super::error::NotificationError;
use super::NotificationSender;

/// Sends notices to the desktop notification service.
#[derive(Debug, Clone, Copy)]
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Creates a notifier. A disabled notifier refuses every notice.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Creates a notifier that never shows anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(false)
    }
}

impl NotificationSender for DesktopNotifier {
    fn send(&self, notice: &Notice) -> Result<(), NotificationError> {
        if !self.enabled {
            return Err(NotificationError::NotAvailable);
        }

        let notice = notice.clone();
        thread::Builder::new()
            .name("focusflow-notify".to_string())
            .spawn(move || {
                if let Err(e) = show(&notice) {
                    warn!(id = %notice.id, "Notification not shown: {}", e);
                }
            })
            .map_err(|e| NotificationError::ThreadFailed(e.to_string()))?;

        Ok(())
    }

    fn is_available(&self) -> bool {
        self.enabled
    }
}

fn show(notice: &Notice) -> Result<(), NotificationError> {
    Notification::new()
        .summary(&notice.title)
        .body(&notice.body)
        .appname(APP_NAME)
        .show()
        .map(|_| ())
        .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

    debug!(id = %notice.id, "Notification shown");
    Ok(())
}
