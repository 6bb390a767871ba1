//! Timer engine module.
//!
//! - [`timer`]: the state machine and its event stream
//! - [`scheduler`]: which mode follows a completed session
//! - [`clock`]: the one-second tick source

pub mod clock;
pub mod scheduler;
pub mod timer;

pub use clock::{Clock, TICK_PERIOD};
pub use scheduler::SessionScheduler;
pub use timer::{TimerEngine, TimerEvent};
