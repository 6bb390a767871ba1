//! Display utilities for the FocusFlow CLI.
//!
//! This module provides formatted output for:
//! - The title line and the status line
//! - Mode tabs, colors and the progress bar
//! - Banners, completion messages and errors
//!
//! The `render_*` functions build strings and have no side effects; the
//! `show_*` methods print them.

use std::io::{self, IsTerminal, Write};

use crate::theme::Theme;
use crate::types::{CompletionEvent, Mode, TimerSnapshot};

use super::input::HELP_TEXT;

/// Width of the progress bar in characters.
pub const PROGRESS_BAR_WIDTH: usize = 20;

const RESET: &str = "\x1b[0m";

// ============================================================================
// Pure rendering
// ============================================================================

/// Returns the title line, e.g. `"24:59 - Focus Time"`.
pub fn render_title_line(snapshot: &TimerSnapshot) -> String {
    format!(
        "{} - {}",
        snapshot.formatted_time,
        snapshot.state.mode.title()
    )
}

/// Returns the subtitle shown under the mode title.
pub fn subtitle(mode: Mode) -> &'static str {
    if mode.is_break() {
        "Take a break"
    } else {
        "Stay focused"
    }
}

/// Returns a bar of `width` cells filled according to `percent`.
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Returns the status line without colors.
pub fn render_status_line(snapshot: &TimerSnapshot, sound_enabled: bool) -> String {
    let state = &snapshot.state;
    format!(
        "{} {} {} {:>3.0}% | Sessions completed: {} | {} | sound {}",
        state.mode.tab_name(),
        snapshot.formatted_time,
        render_progress_bar(snapshot.progress_percent, PROGRESS_BAR_WIDTH),
        snapshot.progress_percent,
        state.completed_focus_sessions,
        if state.running { "running" } else { "paused" },
        if sound_enabled { "on" } else { "off" },
    )
}

/// Returns the mode tabs with the active one bracketed.
pub fn render_mode_tabs(active: Mode) -> String {
    Mode::ALL
        .iter()
        .map(|mode| {
            if *mode == active {
                format!("[{}]", mode.tab_name())
            } else {
                format!(" {} ", mode.tab_name())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the long break countdown, e.g. `"Long break after 2 more focus sessions"`.
pub fn render_schedule(sessions_until_long_break: u32) -> String {
    let noun = if sessions_until_long_break == 1 {
        "session"
    } else {
        "sessions"
    };
    format!(
        "Long break after {} more focus {}",
        sessions_until_long_break, noun
    )
}

/// Returns the message announcing a completion.
pub fn render_completion(event: &CompletionEvent) -> String {
    format!(
        "{} {}",
        crate::notification::completion_title(event.completed_mode),
        crate::notification::completion_body(event)
    )
}

/// Returns the ANSI color code of `mode` under `theme`.
///
/// Focus is red, short break green, long break blue. The dark theme uses
/// the bright variants.
pub fn mode_color(mode: Mode, theme: Theme) -> &'static str {
    match (mode, theme) {
        (Mode::Focus, Theme::Light) => "\x1b[31m",
        (Mode::ShortBreak, Theme::Light) => "\x1b[32m",
        (Mode::LongBreak, Theme::Light) => "\x1b[34m",
        (Mode::Focus, Theme::Dark) => "\x1b[91m",
        (Mode::ShortBreak, Theme::Dark) => "\x1b[92m",
        (Mode::LongBreak, Theme::Dark) => "\x1b[94m",
    }
}

// ============================================================================
// Display
// ============================================================================

/// Terminal output for an interactive session.
#[derive(Debug, Clone, Copy)]
pub struct Display {
    theme: Theme,
    /// Whether stdout is a terminal: colors on and the status line redrawn
    /// in place every second.
    live: bool,
}

impl Display {
    /// Creates a display, detecting whether stdout is a terminal.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            live: io::stdout().is_terminal(),
        }
    }

    /// Creates a display that prints plain lines, never redrawing.
    pub fn plain(theme: Theme) -> Self {
        Self { theme, live: false }
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Changes the theme used for colors.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns true if output is redrawn in place.
    pub fn is_live(&self) -> bool {
        self.live
    }

    fn paint(&self, text: &str, mode: Mode) -> String {
        if self.live {
            format!("{}{}{}", mode_color(mode, self.theme), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Shows the session header.
    pub fn show_header(&self, snapshot: &TimerSnapshot) {
        let mode = snapshot.state.mode;
        self.end_live_line();
        println!("{}", self.paint(&render_mode_tabs(mode), mode));
        println!(
            "{} | {}",
            self.paint(&render_title_line(snapshot), mode),
            subtitle(mode)
        );
    }

    /// Shows the status line on its own line.
    pub fn show_status(&self, snapshot: &TimerSnapshot, sound_enabled: bool) {
        let line = render_status_line(snapshot, sound_enabled);
        self.end_live_line();
        println!("{}", self.paint(&line, snapshot.state.mode));
    }

    /// Shows how many focus sessions remain before the next long break.
    pub fn show_schedule(&self, sessions_until_long_break: u32) {
        self.end_live_line();
        println!("{}", render_schedule(sessions_until_long_break));
    }

    /// Redraws the status line in place after a tick.
    ///
    /// Plain displays stay quiet on ticks.
    pub fn show_tick(&self, snapshot: &TimerSnapshot, sound_enabled: bool) {
        if !self.live {
            return;
        }
        let line = render_status_line(snapshot, sound_enabled);
        print!("\r\x1b[2K{}", self.paint(&line, snapshot.state.mode));
        let _ = io::stdout().flush();
    }

    /// Shows a banner message.
    pub fn show_banner(&self, message: &str) {
        self.end_live_line();
        println!(">> {}", message);
    }

    /// Shows the completion message.
    pub fn show_completion(&self, event: &CompletionEvent) {
        self.show_banner(&render_completion(event));
    }

    /// Shows the command list.
    pub fn show_help(&self) {
        self.end_live_line();
        println!("{}", HELP_TEXT);
    }

    /// Shows the snapshot as pretty JSON.
    pub fn show_json(&self, snapshot: &TimerSnapshot) -> serde_json::Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        self.end_live_line();
        println!("{}", json);
        Ok(())
    }

    /// Shows the end-of-session summary.
    pub fn show_goodbye(&self, completed_focus_sessions: u32) {
        self.end_live_line();
        println!("Sessions completed: {}. Bye!", completed_focus_sessions);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    fn end_live_line(&self) {
        if self.live {
            print!("\r\x1b[2K");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
