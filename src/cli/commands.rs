//! Command definitions for the FocusFlow CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::theme::Theme;
use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// FocusFlow - A terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "focusflow",
    version,
    about = "A terminal Pomodoro timer",
    long_about = "A terminal Pomodoro timer with focus sessions, short breaks and long breaks.\n\
                  Type commands while the timer runs; `help` lists them.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Location of the settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run an interactive timer session
    Run(RunArgs),

    /// Show or change the color theme
    Theme {
        /// What to do with the theme
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Theme subcommand actions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the active theme
    Show,
    /// Switch to the light theme
    Light,
    /// Switch to the dark theme
    Dark,
    /// Switch between light and dark
    Toggle,
}

impl ThemeAction {
    /// Returns the theme this action sets explicitly, if any.
    pub fn target(&self) -> Option<Theme> {
        match self {
            ThemeAction::Light => Some(Theme::Light),
            ThemeAction::Dark => Some(Theme::Dark),
            ThemeAction::Show | ThemeAction::Toggle => None,
        }
    }
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Focus duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub focus: u32,

    /// Short break duration in minutes (1-30)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=30)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub long_break: u32,

    /// Focus sessions before a long break (1-10)
    #[arg(
        short,
        long,
        default_value = "4",
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    pub interval: u32,

    /// Do not start breaks automatically
    #[arg(long)]
    pub no_auto_breaks: bool,

    /// Start focus sessions automatically after a break
    #[arg(long)]
    pub auto_focus: bool,

    /// Disable the completion chime and countdown ticks
    #[arg(long)]
    pub no_sound: bool,

    /// Never show system notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Start the first focus session immediately
    #[arg(long)]
    pub start: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            focus: 25,
            short_break: 5,
            long_break: 15,
            interval: 4,
            no_auto_breaks: false,
            auto_focus: false,
            no_sound: false,
            no_notify: false,
            start: false,
        }
    }
}

impl RunArgs {
    /// Builds the timer configuration described by these arguments.
    pub fn to_config(&self) -> TimerConfig {
        TimerConfig {
            focus_minutes: self.focus,
            short_break_minutes: self.short_break,
            long_break_minutes: self.long_break,
            long_break_interval: self.interval,
            auto_start_breaks: !self.no_auto_breaks,
            auto_start_focus_sessions: self.auto_focus,
            sound_enabled: !self.no_sound,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
