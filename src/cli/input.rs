//! Interactive command parsing.
//!
//! While a session runs, each line typed on stdin is one command. Parsing
//! is pure; the session runner applies the result.

use thiserror::Error;

use crate::types::{Mode, TimerConfig};

/// An interactive command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Start if paused, pause if running
    Toggle,
    /// Restore the full duration of the current mode
    Reset,
    /// Switch to another mode
    Switch(Mode),
    /// Toggle sound cues
    Mute,
    /// Change one setting
    Set(SettingChange),
    /// Switch between light and dark theme
    Theme,
    /// Print the status line
    Status,
    /// Print the timer snapshot as JSON
    Json,
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
}

/// A change to a single timer setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    FocusMinutes(u32),
    ShortBreakMinutes(u32),
    LongBreakMinutes(u32),
    LongBreakInterval(u32),
    AutoStartBreaks(bool),
    AutoStartFocus(bool),
    Sound(bool),
}

impl SettingChange {
    /// Returns a copy of `config` with this change applied.
    ///
    /// The result is not validated.
    pub fn apply_to(&self, config: &TimerConfig) -> TimerConfig {
        let mut next = config.clone();
        match *self {
            SettingChange::FocusMinutes(v) => next.focus_minutes = v,
            SettingChange::ShortBreakMinutes(v) => next.short_break_minutes = v,
            SettingChange::LongBreakMinutes(v) => next.long_break_minutes = v,
            SettingChange::LongBreakInterval(v) => next.long_break_interval = v,
            SettingChange::AutoStartBreaks(v) => next.auto_start_breaks = v,
            SettingChange::AutoStartFocus(v) => next.auto_start_focus_sessions = v,
            SettingChange::Sound(v) => next.sound_enabled = v,
        }
        next
    }
}

/// Errors produced while parsing an input line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown setting '{0}' (focus, short, long, interval, auto-breaks, auto-focus, sound)")]
    UnknownSetting(String),

    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),

    #[error("'{0}' is not on or off")]
    InvalidSwitch(String),
}

/// Help text listing the interactive commands.
pub const HELP_TEXT: &str = "\
Commands:
  s, start           start or resume the timer
  p, pause           pause the timer
  t, toggle          start or pause
  r, reset           restart the current session
  f, focus           switch to a focus session
  sb, short          switch to a short break
  lb, long           switch to a long break
  m, mute            toggle sound
  set <field> <v>    change a setting
                     fields: focus, short, long (minutes), interval,
                             auto-breaks, auto-focus, sound (on/off)
  theme              toggle light/dark theme
  status             show the timer status
  json               print the timer state as JSON
  h, help            show this help
  q, quit            exit";

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the line is not a command.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "s" | "start" => Command::Start,
        "p" | "pause" => Command::Pause,
        "t" | "toggle" => Command::Toggle,
        "r" | "reset" => Command::Reset,
        "f" | "focus" => Command::Switch(Mode::Focus),
        "sb" | "short" => Command::Switch(Mode::ShortBreak),
        "lb" | "long" => Command::Switch(Mode::LongBreak),
        "m" | "mute" => Command::Mute,
        "set" => {
            let field = words.next().ok_or(InputError::MissingArgument("setting name"))?;
            let value = words.next().ok_or(InputError::MissingArgument("setting value"))?;
            Command::Set(parse_setting(field, value)?)
        }
        "theme" => Command::Theme,
        "status" => Command::Status,
        "json" => Command::Json,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(head.to_string())),
    };
    Ok(Some(command))
}

fn parse_setting(field: &str, value: &str) -> Result<SettingChange, InputError> {
    let change = match field.to_ascii_lowercase().as_str() {
        "focus" => SettingChange::FocusMinutes(parse_number(value)?),
        "short" | "short-break" => SettingChange::ShortBreakMinutes(parse_number(value)?),
        "long" | "long-break" => SettingChange::LongBreakMinutes(parse_number(value)?),
        "interval" => SettingChange::LongBreakInterval(parse_number(value)?),
        "auto-breaks" => SettingChange::AutoStartBreaks(parse_switch(value)?),
        "auto-focus" => SettingChange::AutoStartFocus(parse_switch(value)?),
        "sound" => SettingChange::Sound(parse_switch(value)?),
        _ => return Err(InputError::UnknownSetting(field.to_string())),
    };
    Ok(change)
}

fn parse_number(value: &str) -> Result<u32, InputError> {
    value
        .parse()
        .map_err(|_| InputError::InvalidNumber(value.to_string()))
}

fn parse_switch(value: &str) -> Result<bool, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(InputError::InvalidSwitch(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    mod command_tests {
        use super::*;

        #[test]
        fn test_aliases() {
            assert_eq!(parse("s"), Command::Start);
            assert_eq!(parse("start"), Command::Start);
            assert_eq!(parse("p"), Command::Pause);
            assert_eq!(parse("t"), Command::Toggle);
            assert_eq!(parse("r"), Command::Reset);
            assert_eq!(parse("m"), Command::Mute);
            assert_eq!(parse("h"), Command::Help);
            assert_eq!(parse("q"), Command::Quit);
        }

        #[test]
        fn test_mode_switches() {
            assert_eq!(parse("f"), Command::Switch(Mode::Focus));
            assert_eq!(parse("sb"), Command::Switch(Mode::ShortBreak));
            assert_eq!(parse("short"), Command::Switch(Mode::ShortBreak));
            assert_eq!(parse("lb"), Command::Switch(Mode::LongBreak));
        }

        #[test]
        fn test_case_and_whitespace() {
            assert_eq!(parse("  START  "), Command::Start);
            assert_eq!(parse("Json"), Command::Json);
        }

        #[test]
        fn test_blank_line() {
            assert_eq!(parse_command(""), Ok(None));
            assert_eq!(parse_command("   \t"), Ok(None));
        }

        #[test]
        fn test_unknown_command() {
            assert_eq!(
                parse_command("launch"),
                Err(InputError::UnknownCommand("launch".to_string()))
            );
        }
    }

    mod set_tests {
        use super::*;

        #[test]
        fn test_set_durations() {
            assert_eq!(
                parse("set focus 50"),
                Command::Set(SettingChange::FocusMinutes(50))
            );
            assert_eq!(
                parse("set short 10"),
                Command::Set(SettingChange::ShortBreakMinutes(10))
            );
            assert_eq!(
                parse("set long 20"),
                Command::Set(SettingChange::LongBreakMinutes(20))
            );
            assert_eq!(
                parse("set interval 3"),
                Command::Set(SettingChange::LongBreakInterval(3))
            );
        }

        #[test]
        fn test_set_switches() {
            assert_eq!(
                parse("set auto-breaks off"),
                Command::Set(SettingChange::AutoStartBreaks(false))
            );
            assert_eq!(
                parse("set auto-focus on"),
                Command::Set(SettingChange::AutoStartFocus(true))
            );
            assert_eq!(
                parse("set sound OFF"),
                Command::Set(SettingChange::Sound(false))
            );
        }

        #[test]
        fn test_set_errors() {
            assert_eq!(
                parse_command("set"),
                Err(InputError::MissingArgument("setting name"))
            );
            assert_eq!(
                parse_command("set focus"),
                Err(InputError::MissingArgument("setting value"))
            );
            assert_eq!(
                parse_command("set colour 3"),
                Err(InputError::UnknownSetting("colour".to_string()))
            );
            assert_eq!(
                parse_command("set focus -5"),
                Err(InputError::InvalidNumber("-5".to_string()))
            );
            assert_eq!(
                parse_command("set sound maybe"),
                Err(InputError::InvalidSwitch("maybe".to_string()))
            );
        }

        #[test]
        fn test_out_of_range_parses_but_fails_validation() {
            let Command::Set(change) = parse("set focus 0") else {
                panic!("Expected Set command");
            };
            let config = change.apply_to(&TimerConfig::default());
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_apply_to() {
            let config = TimerConfig::default();

            let next = SettingChange::Sound(false).apply_to(&config);
            assert!(!next.sound_enabled);
            assert_eq!(next.focus_minutes, config.focus_minutes);

            let next = SettingChange::LongBreakInterval(2).apply_to(&config);
            assert_eq!(next.long_break_interval, 2);
        }
    }
}
