//! Side effects of the timer.
//!
//! The gate turns completion events into a chime and a system notification,
//! and tick events near zero into countdown ticks. Every side effect is
//! fire-and-forget: a failure is logged and the timer carries on.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::sound::{SoundCue, SoundPlayer, TICK_SECONDS};
use crate::types::CompletionEvent;

use super::content::Notice;
use super::NotificationSender;

/// What the gate does for one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether the completion chime is played
    pub chime: bool,
    /// The system notification to show, if any
    pub notice: Option<Notice>,
}

/// Decides and dispatches the audible and visual alerts of the timer.
#[derive(Clone, Default)]
pub struct NotificationGate {
    player: Option<Arc<dyn SoundPlayer>>,
    sender: Option<Arc<dyn NotificationSender>>,
}

impl NotificationGate {
    /// Creates a gate. Either side may be missing when the platform lacks it.
    pub fn new(
        player: Option<Arc<dyn SoundPlayer>>,
        sender: Option<Arc<dyn NotificationSender>>,
    ) -> Self {
        Self { player, sender }
    }

    /// Creates a gate without sound or notifications.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Decides the alerts for a completion without dispatching anything.
    ///
    /// The chime needs `sound_enabled` and a usable player. The notice needs
    /// a sender that is available (permission granted, not disabled).
    pub fn decide(&self, event: &CompletionEvent, sound_enabled: bool) -> GateDecision {
        let chime = sound_enabled && self.player.as_ref().is_some_and(|p| p.is_available());
        let notice = self
            .sender
            .as_ref()
            .filter(|s| s.is_available())
            .map(|_| Notice::for_completion(event));

        GateDecision { chime, notice }
    }

    /// Decides and dispatches the alerts for a completion.
    pub fn on_completion(&self, event: &CompletionEvent, sound_enabled: bool) -> GateDecision {
        let decision = self.decide(event, sound_enabled);

        if decision.chime {
            self.play(SoundCue::Chime);
        }

        if let (Some(notice), Some(sender)) = (&decision.notice, &self.sender) {
            debug!(id = %notice.id, title = %notice.title, "Sending notification");
            if let Err(e) = sender.send(notice) {
                warn!(id = %notice.id, "Notification failed: {} ({})", e, e.suggestion());
            }
        }

        decision
    }

    /// Plays the countdown tick when a running session is about to end.
    ///
    /// `seconds_remaining` is the time left when the elapsed second began,
    /// so the last tick lands on the second that reaches zero. Returns true
    /// if a tick was requested.
    pub fn on_tick(&self, seconds_remaining: u32, sound_enabled: bool) -> bool {
        if !sound_enabled || !TICK_SECONDS.contains(&seconds_remaining) {
            return false;
        }
        if self.player.is_none() {
            return false;
        }
        self.play(SoundCue::Tick);
        true
    }

    fn play(&self, cue: SoundCue) {
        let Some(player) = &self.player else {
            return;
        };
        if let Err(e) = player.play(cue) {
            warn!("Sound cue failed: {} ({})", e, e.suggestion());
        }
    }
}

impl std::fmt::Debug for NotificationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationGate")
            .field("player", &self.player.is_some())
            .field("sender", &self.sender.is_some())
            .finish()
    }
}
