//! Session scheduling policy.
//!
//! Decides which mode follows a completed session. Focus sessions are
//! followed by a short break, except every `long_break_interval`-th one,
//! which is followed by a long break. Breaks are always followed by focus.

use crate::types::{Mode, TimerConfig};

/// Stateless scheduler for the mode that follows a completed session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionScheduler;

impl SessionScheduler {
    /// Returns the mode to enter after `completed_mode` finishes.
    ///
    /// `completed_focus_sessions` is the count *after* crediting the session
    /// that just finished, so with an interval of 4 the first long break
    /// follows the fourth focus session.
    pub fn next_mode(
        completed_mode: Mode,
        completed_focus_sessions: u32,
        config: &TimerConfig,
    ) -> Mode {
        match completed_mode {
            Mode::Focus => {
                let interval = config.long_break_interval.max(1);
                if completed_focus_sessions % interval == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        }
    }

    /// Returns how many more focus sessions must be completed before the
    /// next long break is scheduled.
    pub fn sessions_until_long_break(completed_focus_sessions: u32, config: &TimerConfig) -> u32 {
        let interval = config.long_break_interval.max(1);
        interval - completed_focus_sessions % interval
    }
}
