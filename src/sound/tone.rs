//! Synthesized cue tones.
//!
//! Both cues are short sine tones built from rodio's source combinators and
//! streamed straight into a sink.

use std::time::Duration;

use rodio::source::{SineWave, Source};

/// Parameters of a synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Pitch in hertz
    pub frequency_hz: f32,
    /// Length in milliseconds
    pub duration_ms: u64,
    /// Fade-in length in milliseconds, to avoid an audible click
    pub fade_in_ms: u64,
}

/// Tone played when a session completes.
pub const CHIME_TONE: ToneSpec = ToneSpec {
    frequency_hz: 880.0,
    duration_ms: 400,
    fade_in_ms: 15,
};

/// Short blip played during the last seconds of a session.
pub const TICK_TONE: ToneSpec = ToneSpec {
    frequency_hz: 1000.0,
    duration_ms: 50,
    fade_in_ms: 5,
};

impl ToneSpec {
    /// Builds a playable source of the tone at `volume` (0.0 - 1.0).
    pub fn source(&self, volume: f32) -> impl Source<Item = f32> + Send + 'static {
        SineWave::new(self.frequency_hz)
            .take_duration(Duration::from_millis(self.duration_ms))
            .fade_in(Duration::from_millis(self.fade_in_ms))
            .amplify(volume)
    }
}
