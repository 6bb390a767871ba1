//! Timer engine for FocusFlow.
//!
//! This module provides the timer state machine:
//! - Commands: start, pause, reset, switch mode, update config
//! - `tick`, the only operation that advances time
//! - Completion handling: session counting, next-mode selection, auto-start
//! - Event firing for the presentation layer and notification gate
//!
//! The engine never sleeps and never schedules itself. An external clock
//! calls [`TimerEngine::tick`] once per elapsed second while the timer runs.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::types::{CompletionEvent, Mode, TimerConfig, TimerSnapshot, TimerState};

use super::scheduler::SessionScheduler;

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for the presentation layer and notification gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Mode being counted down
        mode: Mode,
    },
    /// Countdown paused
    Paused {
        /// Mode being counted down
        mode: Mode,
    },
    /// Remaining time restored to the full duration of the current mode
    Reset {
        /// Mode that was reset
        mode: Mode,
    },
    /// User switched to another mode
    ModeSwitched {
        /// The newly active mode
        mode: Mode,
    },
    /// A new configuration was applied
    ConfigUpdated,
    /// One second elapsed
    Tick {
        /// Mode being counted down
        mode: Mode,
        /// Remaining seconds after this tick
        remaining_seconds: u32,
    },
    /// A countdown reached zero
    Completed(CompletionEvent),
    /// The engine entered the session that follows a completion
    NextSession {
        /// The newly active mode
        mode: Mode,
        /// Whether the session started running on its own
        auto_started: bool,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the timer state and its configuration.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Active configuration
    config: TimerConfig,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine paused at the start of a focus session.
    pub fn new(config: TimerConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(&config),
            config,
            event_tx,
        }
    }

    /// Starts (or resumes) the countdown.
    ///
    /// Returns false without changing anything if the timer is already
    /// running or has no time left.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            debug!("start ignored: already running");
            return false;
        }
        if self.state.seconds_remaining == 0 {
            debug!("start ignored: no time remaining");
            return false;
        }

        self.state.running = true;
        self.emit(TimerEvent::Started {
            mode: self.state.mode,
        });
        true
    }

    /// Pauses the countdown.
    ///
    /// Returns false if the timer was already paused.
    pub fn pause(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        self.state.running = false;
        self.emit(TimerEvent::Paused {
            mode: self.state.mode,
        });
        true
    }

    /// Starts the countdown if paused, pauses it if running.
    ///
    /// Returns whether the timer is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
        self.state.running
    }

    /// Restores the full duration of the current mode and pauses.
    ///
    /// The mode and the completed session count are kept.
    pub fn reset(&mut self) {
        let mode = self.state.mode;
        self.state.enter(mode, &self.config);
        self.emit(TimerEvent::Reset { mode });
    }

    /// Switches to `target`, abandoning the current countdown.
    ///
    /// No completion is credited for the abandoned session.
    pub fn switch_mode(&mut self, target: Mode) {
        self.state.enter(target, &self.config);
        debug!(mode = target.as_str(), "mode switched");
        self.emit(TimerEvent::ModeSwitched { mode: target });
    }

    /// Replaces the configuration.
    ///
    /// If the active mode's duration changed and the timer is paused, the
    /// remaining time is reset to the new duration. A running session keeps
    /// counting, clamped to the new duration if it shrank. Other modes pick
    /// up their new durations the next time they are entered.
    pub fn update_config(&mut self, config: TimerConfig) {
        let mode = self.state.mode;
        let old_duration = self.config.duration_of(mode);
        let new_duration = config.duration_of(mode);
        self.config = config;

        if old_duration != new_duration
            && (!self.state.running || self.state.seconds_remaining > new_duration)
        {
            self.state.seconds_remaining = new_duration;
        }

        info!(
            focus = self.config.focus_minutes,
            short_break = self.config.short_break_minutes,
            long_break = self.config.long_break_minutes,
            interval = self.config.long_break_interval,
            "configuration updated"
        );
        self.emit(TimerEvent::ConfigUpdated);
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing while paused. When the countdown reaches zero the
    /// completion is processed in the same call: the timer pauses, a focus
    /// completion is counted, the [`CompletionEvent`] is emitted, and only
    /// then the next mode is entered and the auto-start policy applied.
    pub fn tick(&mut self) -> Option<CompletionEvent> {
        if !self.state.running {
            return None;
        }

        if self.state.seconds_remaining > 0 {
            self.state.seconds_remaining -= 1;
            self.emit(TimerEvent::Tick {
                mode: self.state.mode,
                remaining_seconds: self.state.seconds_remaining,
            });
        }

        if self.state.seconds_remaining > 0 {
            return None;
        }

        Some(self.handle_timer_complete())
    }

    /// Handles a countdown that reached zero.
    fn handle_timer_complete(&mut self) -> CompletionEvent {
        self.state.running = false;

        let completed_mode = self.state.mode;
        if completed_mode == Mode::Focus {
            self.state.completed_focus_sessions =
                self.state.completed_focus_sessions.saturating_add(1);
        }

        let next_mode = SessionScheduler::next_mode(
            completed_mode,
            self.state.completed_focus_sessions,
            &self.config,
        );
        let event = CompletionEvent {
            completed_mode,
            next_mode,
            completed_focus_sessions: self.state.completed_focus_sessions,
        };

        info!(
            completed = completed_mode.as_str(),
            next = next_mode.as_str(),
            sessions = event.completed_focus_sessions,
            "session completed"
        );
        self.emit(TimerEvent::Completed(event));

        self.state.enter(next_mode, &self.config);
        let auto_started = self.config.auto_start_for(next_mode);
        self.state.running = auto_started;
        self.emit(TimerEvent::NextSession {
            mode: next_mode,
            auto_started,
        });

        event
    }

    /// Returns a reference to the current timer state.
    pub fn get_state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a reference to the active configuration.
    pub fn get_config(&self) -> &TimerConfig {
        &self.config
    }

    /// Returns a read-only snapshot with derived display values.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::new(self.state, &self.config)
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub fn get_state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("timer event dropped: no receiver");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
