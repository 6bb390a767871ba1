//! Interactive session runner.
//!
//! The runner owns the engine and everything around it. A single
//! `tokio::select!` loop serializes the three event sources of a session:
//!
//! - the one-second [`Clock`], armed only while the timer runs
//! - lines typed on stdin, parsed into [`Command`]s
//! - the dismissal deadline of the current [`Banner`]
//!
//! Each event is handled to completion before the next one is polled.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::engine::{Clock, SessionScheduler, TimerEngine, TimerEvent};
use crate::notification::NotificationGate;
use crate::theme::ThemeStore;
use crate::types::{CompletionEvent, Mode, TimerConfig, TimerSnapshot};

use super::banner::{Banner, SETTINGS_UPDATED};
use super::display::{render_completion, Display};
use super::input::{parse_command, Command, SettingChange};

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives one interactive timer session.
pub struct SessionRunner {
    engine: TimerEngine,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    clock: Clock,
    gate: NotificationGate,
    display: Display,
    theme: Option<ThemeStore>,
    banner: Option<Banner>,
}

impl SessionRunner {
    /// Creates a runner with a paused focus session.
    pub fn new(
        config: TimerConfig,
        gate: NotificationGate,
        display: Display,
        theme: Option<ThemeStore>,
    ) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        Self {
            engine: TimerEngine::new(config, event_tx),
            events,
            clock: Clock::new(),
            gate,
            display,
            theme,
            banner: None,
        }
    }

    /// Returns the timer engine.
    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Returns the tick source.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Returns the banner currently shown, if any.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Returns the theme store, if theme persistence is enabled.
    pub fn theme(&self) -> Option<&ThemeStore> {
        self.theme.as_ref()
    }

    fn snapshot(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }

    /// Returns the snapshot as of a tick event.
    ///
    /// A completing tick is drained after the engine entered the next mode,
    /// so the tick is rendered from the event and not the live state.
    fn tick_snapshot(&self, mode: Mode, remaining_seconds: u32) -> TimerSnapshot {
        let mut state = *self.engine.get_state();
        state.mode = mode;
        state.seconds_remaining = remaining_seconds;
        state.running = true;
        TimerSnapshot::new(state, self.engine.get_config())
    }

    fn sound_enabled(&self) -> bool {
        self.engine.get_config().sound_enabled
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Parses and applies one input line.
    pub fn apply_line(&mut self, line: &str) -> Flow {
        match parse_command(line) {
            Ok(Some(command)) => self.apply(command),
            Ok(None) => Flow::Continue,
            Err(e) => {
                Display::show_error(&e.to_string());
                Flow::Continue
            }
        }
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) -> Flow {
        debug!(?command, "Applying command");
        let mut restart_clock = false;

        match command {
            Command::Start => restart_clock = self.engine.start(),
            Command::Pause => {
                self.engine.pause();
            }
            Command::Toggle => {
                let was_running = self.engine.get_state().running;
                restart_clock = self.engine.toggle() && !was_running;
            }
            Command::Reset => self.engine.reset(),
            Command::Switch(mode) => self.engine.switch_mode(mode),
            Command::Mute => {
                let enabled = !self.sound_enabled();
                self.apply_setting(SettingChange::Sound(enabled));
            }
            Command::Set(change) => self.apply_setting(change),
            Command::Theme => self.toggle_theme(),
            Command::Status => {
                self.display.show_status(&self.snapshot(), self.sound_enabled());
                self.display.show_schedule(SessionScheduler::sessions_until_long_break(
                    self.engine.get_state().completed_focus_sessions,
                    self.engine.get_config(),
                ));
            }
            Command::Json => {
                if let Err(e) = self.display.show_json(&self.snapshot()) {
                    Display::show_error(&e.to_string());
                }
            }
            Command::Help => self.display.show_help(),
            Command::Quit => {
                self.clock.disarm();
                self.display
                    .show_goodbye(self.engine.get_state().completed_focus_sessions);
                return Flow::Quit;
            }
        }

        self.drain_events();
        self.sync_clock(restart_clock);
        Flow::Continue
    }

    fn apply_setting(&mut self, change: SettingChange) {
        let next = change.apply_to(self.engine.get_config());
        if let Err(e) = next.validate() {
            Display::show_error(&format!("{} ({})", e, e.suggestion()));
            return;
        }
        self.engine.update_config(next);
        self.set_banner(SETTINGS_UPDATED);
    }

    fn toggle_theme(&mut self) {
        let Some(store) = self.theme.as_mut() else {
            Display::show_error("theme settings are not available");
            return;
        };
        let result = store.toggle();
        // The in-memory theme changes even if saving failed.
        let theme = store.theme();
        self.display.set_theme(theme);
        match result {
            Ok(_) => self.set_banner(format!("Theme: {}", theme)),
            Err(e) => {
                warn!("Theme not saved: {}", e);
                self.set_banner(format!("Theme: {} (not saved)", theme));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Clock and events
    // ------------------------------------------------------------------------

    /// Handles one tick of the clock.
    pub fn on_clock_tick(&mut self) -> Option<CompletionEvent> {
        let completion = self.engine.tick();
        self.drain_events();
        let auto_started = completion.is_some() && self.engine.get_state().running;
        self.sync_clock(auto_started);
        completion
    }

    /// Arms the clock while the timer runs and disarms it otherwise.
    ///
    /// `restart` gives a freshly started session a full first second.
    fn sync_clock(&mut self, restart: bool) {
        if !self.engine.get_state().running {
            self.clock.disarm();
        } else if restart || !self.clock.is_armed() {
            self.clock.arm();
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: TimerEvent) {
        let sound_enabled = self.sound_enabled();
        match event {
            TimerEvent::Tick {
                mode,
                remaining_seconds,
            } => {
                // Ticks are cued by the time left when the second started.
                self.gate.on_tick(remaining_seconds + 1, sound_enabled);
                let snapshot = self.tick_snapshot(mode, remaining_seconds);
                self.display.show_tick(&snapshot, sound_enabled);
            }
            TimerEvent::Completed(completion) => {
                self.gate.on_completion(&completion, sound_enabled);
                self.set_banner(render_completion(&completion));
            }
            TimerEvent::NextSession { .. } | TimerEvent::ModeSwitched { .. } => {
                self.display.show_header(&self.snapshot());
                self.display.show_status(&self.snapshot(), sound_enabled);
            }
            TimerEvent::Started { .. }
            | TimerEvent::Paused { .. }
            | TimerEvent::Reset { .. }
            | TimerEvent::ConfigUpdated => {
                self.display.show_status(&self.snapshot(), sound_enabled);
            }
        }
    }

    fn set_banner(&mut self, message: impl Into<String>) {
        let banner = Banner::new(message);
        self.display.show_banner(banner.message());
        self.banner = Some(banner);
    }

    /// Clears the banner once its deadline has passed.
    pub fn dismiss_expired_banner(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            debug!("Banner dismissed");
            self.banner = None;
            self.display.show_status(&self.snapshot(), self.sound_enabled());
        }
    }

    // ------------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------------

    /// Runs the session until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input fails.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let config = self.engine.get_config();
        info!(
            focus = config.focus_minutes,
            short_break = config.short_break_minutes,
            long_break = config.long_break_minutes,
            interval = config.long_break_interval,
            "Session started"
        );
        self.display.show_header(&self.snapshot());
        self.display.show_status(&self.snapshot(), self.sound_enabled());
        self.sync_clock(true);

        loop {
            let banner_deadline = self.banner.as_ref().map(Banner::expires_at);

            tokio::select! {
                _ = self.clock.tick() => {
                    self.on_clock_tick();
                }
                line = lines.next_line() => {
                    let line = line.context("failed to read input")?;
                    match line {
                        Some(line) => {
                            if self.apply_line(&line) == Flow::Quit {
                                break;
                            }
                        }
                        None => {
                            debug!("Input closed, ending session");
                            self.apply(Command::Quit);
                            break;
                        }
                    }
                }
                _ = sleep_until_opt(banner_deadline) => {
                    self.dismiss_expired_banner(Instant::now());
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for SessionRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRunner")
            .field("state", self.engine.get_state())
            .field("clock_armed", &self.clock.is_armed())
            .field("banner", &self.banner)
            .finish_non_exhaustive()
    }
}

async fn sleep_until_opt(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

// ============================================================================
// Tests
// ============================================================================
