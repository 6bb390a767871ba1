//! One-second clock that drives the timer engine.
//!
//! The clock is armed only while the engine is running, so there is never
//! more than one tick source per engine. A disarmed clock never yields.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Tick period of the clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Clock delivering one tick per elapsed second while armed.
#[derive(Debug, Default)]
pub struct Clock {
    interval: Option<Interval>,
}

impl Clock {
    /// Creates a disarmed clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clock. The first tick fires one period from now.
    ///
    /// Re-arming replaces the previous schedule.
    pub fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
    }

    /// Stops delivering ticks.
    pub fn disarm(&mut self) {
        self.interval = None;
    }

    /// Returns true while ticks are being delivered.
    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Waits for the next tick.
    ///
    /// Pends forever while disarmed, which makes it safe to use as a
    /// `tokio::select!` branch.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
