//! Configuration error types.
//!
//! Timer settings are validated once, at the boundary where they enter the
//! application (CLI arguments and interactive `set` commands). The engine
//! itself never sees an invalid configuration.

use thiserror::Error;

/// Errors produced when validating a [`TimerConfig`](super::TimerConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A session duration is outside its allowed range.
    #[error("{field} must be between {min} and {max} minutes (got {value})")]
    DurationOutOfRange {
        /// Name of the offending setting
        field: &'static str,
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// The long break interval is outside its allowed range.
    #[error("long break interval must be between {min} and {max} sessions (got {value})")]
    IntervalOutOfRange {
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },
}

impl ConfigError {
    /// Returns the name of the setting that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::DurationOutOfRange { field, .. } => field,
            Self::IntervalOutOfRange { .. } => "long break interval",
        }
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DurationOutOfRange { .. } => "Pick a duration inside the allowed range",
            Self::IntervalOutOfRange { .. } => "Use at least one focus session per long break",
        }
    }
}
