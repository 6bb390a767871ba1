//! Core data types for FocusFlow.
//!
//! This module defines the data structures used for:
//! - Session modes (focus, short break, long break)
//! - Timer configuration with validation
//! - Timer state and its read-only snapshot
//! - Completion events emitted when a countdown reaches zero

mod error;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Allowed focus duration in minutes.
pub const FOCUS_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;

/// Allowed short break duration in minutes.
pub const SHORT_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=30;

/// Allowed long break duration in minutes.
pub const LONG_BREAK_MINUTES_RANGE: RangeInclusive<u32> = 1..=60;

/// Allowed number of focus sessions between long breaks.
pub const LONG_BREAK_INTERVAL_RANGE: RangeInclusive<u32> = 1..=10;

// ============================================================================
// Mode
// ============================================================================

/// The kind of session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Uninterrupted work
    #[default]
    Focus,
    /// Rest after a focus session
    ShortBreak,
    /// Longer rest after every `long_break_interval` focus sessions
    LongBreak,
}

impl Mode {
    /// All modes, in tab order.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    /// Returns the short tab name shown in the mode selector.
    pub fn tab_name(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Returns the title used in the title line.
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Focus => "Focus Time",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Returns true for either kind of break.
    pub fn is_break(&self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tab_name())
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Durations and auto-start policy for the timer.
///
/// Replacing the configuration is a single atomic update; see
/// [`TimerEngine::update_config`](crate::engine::TimerEngine::update_config)
/// for how it affects a session in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Focus duration in minutes (1-60)
    pub focus_minutes: u32,
    /// Short break duration in minutes (1-30)
    pub short_break_minutes: u32,
    /// Long break duration in minutes (1-60)
    pub long_break_minutes: u32,
    /// Completed focus sessions per long break (1-10)
    pub long_break_interval: u32,
    /// Whether breaks start running as soon as they are entered
    pub auto_start_breaks: bool,
    /// Whether focus sessions start running as soon as they are entered
    pub auto_start_focus_sessions: bool,
    /// Whether chime and tick cues are played
    pub sound_enabled: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_interval: 4,
            auto_start_breaks: true,
            auto_start_focus_sessions: false,
            sound_enabled: true,
        }
    }
}

impl TimerConfig {
    /// Sets the focus duration.
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_minutes = minutes;
        self
    }

    /// Sets the short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Sets the long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Sets the number of focus sessions per long break.
    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval;
        self
    }

    /// Sets both auto-start flags.
    pub fn with_auto_start(mut self, breaks: bool, focus_sessions: bool) -> Self {
        self.auto_start_breaks = breaks;
        self.auto_start_focus_sessions = focus_sessions;
        self
    }

    /// Returns the configured length of `mode` in minutes.
    pub fn minutes_of(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Returns the configured length of `mode` in seconds.
    pub fn duration_of(&self, mode: Mode) -> u32 {
        self.minutes_of(mode).saturating_mul(60)
    }

    /// Returns whether a session of `mode` starts running when entered
    /// through a completion.
    pub fn auto_start_for(&self, mode: Mode) -> bool {
        if mode.is_break() {
            self.auto_start_breaks
        } else {
            self.auto_start_focus_sessions
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first setting found outside its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_minutes("focus duration", self.focus_minutes, FOCUS_MINUTES_RANGE)?;
        check_minutes(
            "short break duration",
            self.short_break_minutes,
            SHORT_BREAK_MINUTES_RANGE,
        )?;
        check_minutes(
            "long break duration",
            self.long_break_minutes,
            LONG_BREAK_MINUTES_RANGE,
        )?;
        if !LONG_BREAK_INTERVAL_RANGE.contains(&self.long_break_interval) {
            return Err(ConfigError::IntervalOutOfRange {
                value: self.long_break_interval,
                min: *LONG_BREAK_INTERVAL_RANGE.start(),
                max: *LONG_BREAK_INTERVAL_RANGE.end(),
            });
        }
        Ok(())
    }
}

fn check_minutes(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DurationOutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The mutable state of the timer.
///
/// Only [`TimerEngine`](crate::engine::TimerEngine) mutates it; everyone else
/// sees a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// The active mode
    pub mode: Mode,
    /// Seconds left in the active session
    pub seconds_remaining: u32,
    /// Whether the countdown is advancing
    pub running: bool,
    /// Focus sessions completed since the application started
    pub completed_focus_sessions: u32,
}

impl TimerState {
    /// Creates the initial state: a paused, full-length focus session.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            mode: Mode::Focus,
            seconds_remaining: config.duration_of(Mode::Focus),
            running: false,
            completed_focus_sessions: 0,
        }
    }

    /// Enters `mode` with its full duration, paused.
    pub fn enter(&mut self, mode: Mode, config: &TimerConfig) {
        self.mode = mode;
        self.seconds_remaining = config.duration_of(mode);
        self.running = false;
    }
}

// ============================================================================
// CompletionEvent
// ============================================================================

/// Raised once when a running countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// The mode whose countdown just finished
    pub completed_mode: Mode,
    /// The mode the engine moves to next
    pub next_mode: Mode,
    /// Completed focus sessions, including this one if it was a focus session
    pub completed_focus_sessions: u32,
}

impl CompletionEvent {
    /// Returns true if the upcoming session is a long break.
    pub fn is_long_break_next(&self) -> bool {
        self.next_mode == Mode::LongBreak
    }
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// Read-only view of the engine for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    /// Current timer state
    #[serde(flatten)]
    pub state: TimerState,
    /// Full length of the active mode in seconds
    pub duration_seconds: u32,
    /// Share of the active session already elapsed (0-100)
    pub progress_percent: f64,
    /// Remaining time as `MM:SS`
    pub formatted_time: String,
}

impl TimerSnapshot {
    /// Builds a snapshot from a state and the configuration it runs under.
    pub fn new(state: TimerState, config: &TimerConfig) -> Self {
        let duration_seconds = config.duration_of(state.mode);
        Self {
            state,
            duration_seconds,
            progress_percent: progress_percent(duration_seconds, state.seconds_remaining),
            formatted_time: format_clock(state.seconds_remaining),
        }
    }
}

/// Computes `100 * (duration - remaining) / duration`.
///
/// A zero-length session counts as finished.
pub fn progress_percent(duration_seconds: u32, seconds_remaining: u32) -> f64 {
    if duration_seconds == 0 {
        return 100.0;
    }
    let elapsed = duration_seconds.saturating_sub(seconds_remaining);
    100.0 * f64::from(elapsed) / f64::from(duration_seconds)
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Mode Tests
    // ------------------------------------------------------------------------

    mod mode_tests {
        use super::*;

        #[test]
        fn test_default_is_focus() {
            assert_eq!(Mode::default(), Mode::Focus);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Mode::Focus.as_str(), "focus");
            assert_eq!(Mode::ShortBreak.as_str(), "short_break");
            assert_eq!(Mode::LongBreak.as_str(), "long_break");
        }

        #[test]
        fn test_titles() {
            assert_eq!(Mode::Focus.title(), "Focus Time");
            assert_eq!(Mode::ShortBreak.title(), "Short Break");
            assert_eq!(Mode::LongBreak.tab_name(), "Long Break");
            assert_eq!(Mode::Focus.to_string(), "Focus");
        }

        #[test]
        fn test_is_break() {
            assert!(!Mode::Focus.is_break());
            assert!(Mode::ShortBreak.is_break());
            assert!(Mode::LongBreak.is_break());
        }

        #[test]
        fn test_serialize_deserialize() {
            let json = serde_json::to_string(&Mode::LongBreak).unwrap();
            assert_eq!(json, "\"long_break\"");

            let mode: Mode = serde_json::from_str("\"short_break\"").unwrap();
            assert_eq!(mode, Mode::ShortBreak);
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.focus_minutes, 25);
            assert_eq!(config.short_break_minutes, 5);
            assert_eq!(config.long_break_minutes, 15);
            assert_eq!(config.long_break_interval, 4);
            assert!(config.auto_start_breaks);
            assert!(!config.auto_start_focus_sessions);
            assert!(config.sound_enabled);
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_focus_minutes(50)
                .with_short_break_minutes(10)
                .with_long_break_minutes(30)
                .with_long_break_interval(3)
                .with_auto_start(false, true);

            assert_eq!(config.focus_minutes, 50);
            assert_eq!(config.short_break_minutes, 10);
            assert_eq!(config.long_break_minutes, 30);
            assert_eq!(config.long_break_interval, 3);
            assert!(!config.auto_start_breaks);
            assert!(config.auto_start_focus_sessions);
        }

        #[test]
        fn test_duration_of() {
            let config = TimerConfig::default();
            assert_eq!(config.duration_of(Mode::Focus), 25 * 60);
            assert_eq!(config.duration_of(Mode::ShortBreak), 5 * 60);
            assert_eq!(config.duration_of(Mode::LongBreak), 15 * 60);
        }

        #[test]
        fn test_auto_start_for() {
            let config = TimerConfig::default().with_auto_start(true, false);
            assert!(config.auto_start_for(Mode::ShortBreak));
            assert!(config.auto_start_for(Mode::LongBreak));
            assert!(!config.auto_start_for(Mode::Focus));
        }

        #[test]
        fn test_validate_success() {
            assert!(TimerConfig::default().validate().is_ok());
        }

        #[test]
        fn test_validate_boundary_values() {
            let config = TimerConfig {
                focus_minutes: 1,
                short_break_minutes: 1,
                long_break_minutes: 1,
                long_break_interval: 1,
                ..TimerConfig::default()
            };
            assert!(config.validate().is_ok());

            let config = TimerConfig {
                focus_minutes: 60,
                short_break_minutes: 30,
                long_break_minutes: 60,
                long_break_interval: 10,
                ..TimerConfig::default()
            };
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_zero_focus() {
            let config = TimerConfig::default().with_focus_minutes(0);
            let err = config.validate().unwrap_err();
            assert_eq!(err.field(), "focus duration");
        }

        #[test]
        fn test_validate_short_break_too_high() {
            let config = TimerConfig::default().with_short_break_minutes(31);
            let err = config.validate().unwrap_err();
            assert_eq!(err.field(), "short break duration");
        }

        #[test]
        fn test_validate_long_break_too_high() {
            let config = TimerConfig::default().with_long_break_minutes(61);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_zero_interval() {
            let config = TimerConfig::default().with_long_break_interval(0);
            assert_eq!(
                config.validate(),
                Err(ConfigError::IntervalOutOfRange {
                    value: 0,
                    min: 1,
                    max: 10
                })
            );
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = TimerConfig::default().with_focus_minutes(45);
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"focus_minutes\":45"));

            let deserialized: TimerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_new_state() {
            let config = TimerConfig::default().with_focus_minutes(30);
            let state = TimerState::new(&config);

            assert_eq!(state.mode, Mode::Focus);
            assert_eq!(state.seconds_remaining, 30 * 60);
            assert!(!state.running);
            assert_eq!(state.completed_focus_sessions, 0);
        }

        #[test]
        fn test_enter() {
            let config = TimerConfig::default();
            let mut state = TimerState::new(&config);
            state.running = true;
            state.completed_focus_sessions = 2;

            state.enter(Mode::LongBreak, &config);

            assert_eq!(state.mode, Mode::LongBreak);
            assert_eq!(state.seconds_remaining, 15 * 60);
            assert!(!state.running);
            assert_eq!(state.completed_focus_sessions, 2);
        }
    }

    // ------------------------------------------------------------------------
    // Snapshot Tests
    // ------------------------------------------------------------------------

    mod snapshot_tests {
        use super::*;

        #[test]
        fn test_format_clock() {
            assert_eq!(format_clock(0), "00:00");
            assert_eq!(format_clock(45), "00:45");
            assert_eq!(format_clock(90), "01:30");
            assert_eq!(format_clock(25 * 60), "25:00");
            assert_eq!(format_clock(60 * 60), "60:00");
        }

        #[test]
        fn test_progress_percent() {
            assert_eq!(progress_percent(1500, 1500), 0.0);
            assert_eq!(progress_percent(1500, 750), 50.0);
            assert_eq!(progress_percent(1500, 0), 100.0);
        }

        #[test]
        fn test_progress_percent_zero_duration() {
            assert_eq!(progress_percent(0, 0), 100.0);
        }

        #[test]
        fn test_snapshot_new() {
            let config = TimerConfig::default();
            let mut state = TimerState::new(&config);
            state.seconds_remaining = 15 * 60;

            let snapshot = TimerSnapshot::new(state, &config);

            assert_eq!(snapshot.duration_seconds, 25 * 60);
            assert_eq!(snapshot.formatted_time, "15:00");
            assert_eq!(snapshot.progress_percent, 40.0);
        }

        #[test]
        fn test_snapshot_serializes_flat() {
            let config = TimerConfig::default();
            let snapshot = TimerSnapshot::new(TimerState::new(&config), &config);

            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"mode\":\"focus\""));
            assert!(json.contains("\"seconds_remaining\":1500"));
            assert!(json.contains("\"formatted_time\":\"25:00\""));
        }
    }
}
