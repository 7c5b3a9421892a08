//! Clock utilities for session timing.
//!
//! Every capture in a session is stamped with a time relative to the
//! session start. The clock anchors a monotonic epoch at start and keeps
//! the wall-clock time of that epoch alongside it, so relative times are
//! immune to wall-clock adjustments while the saved metadata still
//! carries human-readable timestamps.

use std::time::Instant;

/// A session clock anchored to the moment the capture loop started.
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (RFC 3339, local offset).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new session clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Get seconds elapsed since session start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_elapsed() {
        let clock = SessionClock::start();
        // Should be very small but non-negative
        assert!(clock.elapsed_secs() < 1.0);
        assert!(clock.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_epoch_wall_parses() {
        let clock = SessionClock::start();
        assert!(chrono::DateTime::parse_from_rfc3339(clock.epoch_wall()).is_ok());
    }
}
