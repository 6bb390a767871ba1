//! Transient messages shown under the status line.
//!
//! A banner dismisses itself after a fixed interval, independent of the
//! timer clock.

use std::time::Duration;

use tokio::time::Instant;

/// How long a banner stays visible.
pub const BANNER_TTL: Duration = Duration::from_secs(3);

/// Message shown after settings are applied.
pub const SETTINGS_UPDATED: &str = "Settings updated successfully";

/// A message with its own dismissal deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    message: String,
    expires_at: Instant,
}

impl Banner {
    /// Creates a banner that expires [`BANNER_TTL`] from now.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_ttl(message, BANNER_TTL)
    }

    /// Creates a banner that expires `ttl` from now.
    pub fn with_ttl(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the dismissal deadline.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Returns true once the deadline has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_banner_expires_after_ttl() {
        let banner = Banner::new(SETTINGS_UPDATED);
        assert!(!banner.is_expired(Instant::now()));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(!banner.is_expired(Instant::now()));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(banner.is_expired(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_ttl() {
        let banner = Banner::with_ttl("hello", Duration::from_secs(1));
        assert_eq!(banner.message(), "hello");

        tokio::time::sleep_until(banner.expires_at()).await;
        assert!(banner.is_expired(Instant::now()));
    }
}
