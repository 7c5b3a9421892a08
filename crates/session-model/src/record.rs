//! Per-capture metadata records.

use serde::{Deserialize, Serialize};

/// One saved capture within a session.
///
/// Records are appended in capture order and never reordered, so
/// `relative_time` is non-decreasing across a session's record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    /// Filesystem path to the saved image.
    pub path: String,

    /// User-facing display number (1-based).
    pub monitor: u32,

    /// Wall-clock capture time (RFC 3339 with offset).
    pub timestamp: String,

    /// Seconds elapsed since session start at capture time.
    pub relative_time: f64,

    /// Image size as `"<width>x<height>"` in pixels.
    pub resolution: String,
}

impl CaptureRecord {
    /// Elapsed time at capture, in minutes.
    pub fn elapsed_minutes(&self) -> f64 {
        self.relative_time / 60.0
    }
}
