//! FocusFlow Library
//!
//! This library provides the core functionality for the FocusFlow CLI.
//! It includes:
//! - Timer engine, session scheduler and one-second clock
//! - Completion alerts (sound cues and desktop notifications)
//! - Interactive session runner, CLI parsing and display utilities
//! - Light/dark theme persistence
//! - Type definitions for configuration and state

pub mod cli;
pub mod engine;
pub mod notification;
pub mod sound;
pub mod theme;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_clock, progress_percent, CompletionEvent, ConfigError, Mode, TimerConfig,
    TimerSnapshot, TimerState,
};

pub use engine::{Clock, SessionScheduler, TimerEngine, TimerEvent};

pub use notification::{
    DesktopNotifier, GateDecision, MockNotificationSender, Notice, NotificationError,
    NotificationGate, NotificationSender,
};

pub use sound::{MockSoundPlayer, RodioSoundPlayer, SoundCue, SoundError, SoundPlayer};

pub use theme::{Theme, ThemeError, ThemeStore};
