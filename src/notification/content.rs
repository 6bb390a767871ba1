//! Notification content construction.
//!
//! The title names the session that ended, the body names what comes next.

use uuid::Uuid;

use crate::types::{CompletionEvent, Mode};

/// Application name shown by the notification service.
pub const APP_NAME: &str = "FocusFlow";

/// A system notification ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Identifier used to correlate log lines
    pub id: Uuid,
    /// Notification title
    pub title: String,
    /// Notification body
    pub body: String,
}

impl Notice {
    /// Creates a notice with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Creates the notice for a completed session.
    #[must_use]
    pub fn for_completion(event: &CompletionEvent) -> Self {
        Self::new(
            completion_title(event.completed_mode),
            completion_body(event),
        )
    }
}

/// Returns the title announcing that a session of `mode` ended.
#[must_use]
pub fn completion_title(mode: Mode) -> &'static str {
    match mode {
        Mode::Focus => "Focus session completed!",
        Mode::ShortBreak => "Short break completed!",
        Mode::LongBreak => "Long break completed!",
    }
}

/// Returns the body announcing the session that follows.
#[must_use]
pub fn completion_body(event: &CompletionEvent) -> &'static str {
    match (event.completed_mode, event.next_mode) {
        (Mode::Focus, Mode::LongBreak) => "Time for a long break!",
        (Mode::Focus, _) => "Time for a short break!",
        _ => "Break complete! Ready for the next focus session?",
    }
}
