//! Sound player implementation using rodio.
//!
//! rodio's `OutputStream` cannot leave the thread that opened it, so the
//! player owns a dedicated audio thread and hands it cues over a channel.
//! `RodioSoundPlayer` itself is just the sending half and is `Send + Sync`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::SoundCue;

/// A sound player that plays cues on a background audio thread.
///
/// Playback is non-blocking; cues continue playing after `play` returns.
pub struct RodioSoundPlayer {
    /// Queue feeding the audio thread.
    cue_tx: Sender<SoundCue>,
    /// Cleared when the audio thread exits.
    alive: Arc<AtomicBool>,
}

impl RodioSoundPlayer {
    /// Creates a new sound player and opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available, or `SoundError::PlaybackError` if the audio thread
    /// could not be started.
    pub fn new() -> Result<Self, SoundError> {
        let (cue_tx, cue_rx) = crossbeam_channel::unbounded();
        let (ready_tx, ready_rx) = crossbeam_channel::bounded(1);
        let alive = Arc::new(AtomicBool::new(true));
        let thread_alive = Arc::clone(&alive);

        thread::Builder::new()
            .name("focusflow-audio".to_string())
            .spawn(move || {
                audio_thread(cue_rx, ready_tx);
                thread_alive.store(false, Ordering::SeqCst);
            })
            .map_err(|e| SoundError::PlaybackError(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|_| SoundError::PlaybackError("audio thread exited during startup".into()))??;

        debug!("Audio output stream initialized");
        Ok(Self { cue_tx, alive })
    }

    /// Queues a cue for playback.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlaybackError` if the audio thread has stopped.
    pub fn play(&self, cue: SoundCue) -> Result<(), SoundError> {
        self.cue_tx
            .send(cue)
            .map_err(|_| SoundError::PlaybackError("audio thread stopped".into()))
    }

    /// Returns true while the audio thread accepts cues.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("queued", &self.cue_tx.len())
            .finish_non_exhaustive()
    }
}

fn audio_thread(cue_rx: Receiver<SoundCue>, ready_tx: Sender<Result<(), SoundError>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = ready_tx.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
            return;
        }
    };
    let _ = ready_tx.send(Ok(()));

    for cue in cue_rx.iter() {
        if let Err(e) = play_cue(&handle, cue) {
            warn!("Failed to play {:?} cue: {}", cue, e);
        }
    }
    debug!("Audio thread stopped");
}

fn play_cue(handle: &OutputStreamHandle, cue: SoundCue) -> Result<(), SoundError> {
    let sink = Sink::try_new(handle).map_err(|e| SoundError::StreamError(e.to_string()))?;
    sink.append(cue.tone().source(cue.volume()));
    sink.detach();

    debug!(?cue, "Sound playback started (detached)");
    Ok(())
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player() -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new() {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, sound disabled: {}", e);
            None
        }
    }
}
