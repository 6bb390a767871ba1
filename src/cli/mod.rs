//! CLI module for FocusFlow.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `input`: Interactive commands typed during a session
//! - `runner`: The session event loop
//! - `banner`: Transient messages
//! - `display`: Output formatting and display logic

pub mod banner;
pub mod commands;
pub mod display;
pub mod input;
pub mod runner;

pub use banner::{Banner, BANNER_TTL};
pub use commands::{Cli, Commands, RunArgs, ThemeAction};
pub use display::Display;
pub use input::{parse_command, Command, InputError, SettingChange};
pub use runner::{Flow, SessionRunner};
