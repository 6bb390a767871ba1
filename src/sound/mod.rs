//! Sound playback for FocusFlow.
//!
//! This module provides the audible cues of the timer:
//!
//! - A chime when a session completes
//! - A short tick during the last seconds of a session
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ NotificationGate │
//! └────────┬─────────┘
//!          │ play(cue)
//!          ▼
//! ┌──────────────────┐  channel  ┌──────────────────┐
//! │ RodioSoundPlayer │──────────▶│   audio thread   │
//! └──────────────────┘           │ (OutputStream)   │
//!                                └──────────────────┘
//! ```

mod error;
mod player;
mod tone;

pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use tone::{ToneSpec, CHIME_TONE, TICK_TONE};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Seconds remaining at which countdown ticks are played.
pub const TICK_SECONDS: std::ops::RangeInclusive<u32> = 1..=3;

/// An audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Played once when a session completes
    Chime,
    /// Played at each of the last seconds of a running session
    Tick,
}

impl SoundCue {
    /// Returns the playback volume of the cue (0.0 - 1.0).
    pub fn volume(&self) -> f32 {
        match self {
            SoundCue::Chime => 0.7,
            SoundCue::Tick => 0.2,
        }
    }

    /// Returns the tone of the cue.
    pub fn tone(&self) -> ToneSpec {
        match self {
            SoundCue::Chime => CHIME_TONE,
            SoundCue::Tick => TICK_TONE,
        }
    }
}

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer: Send + Sync {
    /// Plays a cue.
    ///
    /// This method should be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, cue: SoundCue) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, cue)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundCue>>,
    available: AtomicBool,
    should_fail: AtomicBool,
}

impl Default for MockSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.lock_calls().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundCue> {
        self.lock_calls().clone()
    }

    /// Returns how many times `cue` was played.
    #[must_use]
    pub fn count_of(&self, cue: SoundCue) -> usize {
        self.lock_calls().iter().filter(|c| **c == cue).count()
    }

    pub fn clear_calls(&self) {
        self.lock_calls().clear();
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<SoundCue>> {
        self.play_calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.lock_calls().push(cue);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
