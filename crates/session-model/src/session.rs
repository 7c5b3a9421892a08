//! Session metadata and aggregate state.
//!
//! A session is the top-level container for one bounded capture run: its
//! identity, timing, monitor configuration, and every capture record taken
//! while it was live. The serialized form is the session's `metadata.json`.

use serde::{Deserialize, Serialize};

use crate::record::CaptureRecord;

/// Top-level session record (`metadata.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (`YYYYMMDD_HHMMSS`, local time). Doubles as the
    /// session directory name.
    pub session_id: String,

    /// Human-readable task label.
    pub task_name: String,

    /// Wall-clock session start (RFC 3339 with offset).
    pub start_time: String,

    /// Wall-clock session end; unset while the session is live.
    #[serde(default)]
    pub end_time: Option<String>,

    /// Total session length in seconds; unset while the session is live.
    #[serde(default)]
    pub duration_seconds: Option<f64>,

    /// Seconds between capture ticks.
    pub capture_interval_secs: u64,

    /// The raw monitor spec the session was started with.
    pub monitors_config: String,

    /// Resolved 0-based display indices captured each tick, fixed at start.
    pub resolved_monitors: Vec<usize>,

    /// Number of captures taken. Kept equal to `captures.len()`.
    pub capture_count: usize,

    /// Every capture in append order.
    pub captures: Vec<CaptureRecord>,
}

impl Session {
    /// Create a new session stamped with the current local time.
    ///
    /// An empty `task_name` gets the synthetic label `Task_<session_id>`.
    pub fn new(
        task_name: impl Into<String>,
        capture_interval_secs: u64,
        monitors_config: impl Into<String>,
        resolved_monitors: Vec<usize>,
    ) -> Self {
        let now = chrono::Local::now();
        let session_id = now.format("%Y%m%d_%H%M%S").to_string();
        let task_name = task_name.into();
        let task_name = if task_name.is_empty() {
            format!("Task_{session_id}")
        } else {
            task_name
        };

        Self {
            session_id,
            task_name,
            start_time: now.to_rfc3339(),
            end_time: None,
            duration_seconds: None,
            capture_interval_secs,
            monitors_config: monitors_config.into(),
            resolved_monitors,
            capture_count: 0,
            captures: vec![],
        }
    }

    /// Append a capture record, keeping `capture_count` in sync.
    pub fn push_capture(&mut self, record: CaptureRecord) {
        self.captures.push(record);
        self.capture_count = self.captures.len();
    }

    /// Stamp the end of the session.
    pub fn finalize(&mut self, end_time: impl Into<String>, duration_seconds: f64) {
        self.end_time = Some(end_time.into());
        self.duration_seconds = Some(duration_seconds);
    }

    /// Whether the session has been finalized.
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Session length in minutes (0 while the session is live).
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds.unwrap_or(0.0) / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(relative_time: f64) -> CaptureRecord {
        CaptureRecord {
            path: format!("screen_{relative_time}.png"),
            monitor: 1,
            timestamp: "2025-01-14T09:30:00+01:00".to_string(),
            relative_time,
            resolution: "1920x1080".to_string(),
        }
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new("Refactor parser", 30, "all", vec![0, 1]);
        assert_eq!(session.task_name, "Refactor parser");
        assert_eq!(session.capture_interval_secs, 30);
        assert_eq!(session.resolved_monitors, vec![0, 1]);
        assert_eq!(session.session_id.len(), "20250114_093000".len());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_empty_task_name_gets_synthetic_label() {
        let session = Session::new("", 30, "primary", vec![0]);
        assert_eq!(session.task_name, format!("Task_{}", session.session_id));
    }

    #[test]
    fn test_push_capture_updates_count() {
        let mut session = Session::new("Test", 30, "primary", vec![0]);
        session.push_capture(record(0.0));
        session.push_capture(record(30.0));
        assert_eq!(session.capture_count, 2);
        assert_eq!(session.captures.len(), 2);
    }

    #[test]
    fn test_finalize() {
        let mut session = Session::new("Test", 30, "primary", vec![0]);
        session.finalize("2025-01-14T10:30:00+01:00", 3600.0);
        assert!(session.is_finished());
        assert_eq!(session.duration_seconds, Some(3600.0));
        assert!((session.duration_minutes() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_session_serialization() {
        let mut session = Session::new("Test", 30, "1,2", vec![0, 1]);
        session.push_capture(record(0.0));
        session.finalize("2025-01-14T10:30:00+01:00", 65.2);

        let json = serde_json::to_string_pretty(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.session_id, session.session_id);
        assert_eq!(parsed.captures, session.captures);
        assert_eq!(parsed.duration_seconds, Some(65.2));
    }

    #[test]
    fn test_deserialization_defaults_end_fields_for_live_sessions() {
        let mut value = serde_json::to_value(Session::new("Live", 30, "all", vec![0])).unwrap();

        let object = value
            .as_object_mut()
            .expect("session should serialize as object");
        object.remove("end_time");
        object.remove("duration_seconds");

        let parsed: Session = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.end_time, None);
        assert_eq!(parsed.duration_seconds, None);
        assert!(!parsed.is_finished());
    }
}
