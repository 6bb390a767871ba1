//! Sound system error types.
//!
//! Sound failures are never fatal: callers log them and carry on without
//! audio.

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to create an audio sink on the output stream.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// The audio thread is gone or playback otherwise failed.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_) | Self::StreamError(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) => "Connect an audio device or run with --no-sound",
            Self::StreamError(_) => "Check your audio settings",
            Self::PlaybackError(_) => "Restart the application to re-initialize audio",
        }
    }
}
