//! Error types for theme persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Theme persistence error type.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The platform has no per-user configuration directory.
    #[error("Failed to locate the configuration directory")]
    ConfigDirNotFound,

    /// The settings file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid JSON.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        /// Settings file path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The settings file or its directory could not be written.
    #[error("Failed to write settings file {path}: {source}")]
    Write {
        /// Settings file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The settings could not be serialized.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A theme name other than `light` or `dark`.
    #[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
    UnknownTheme(String),
}

impl ThemeError {
    /// Returns true if the error came from reading an existing file.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
