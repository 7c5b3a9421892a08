//! Capture session lifecycle and the periodic capture loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use tasklens_common::clock::SessionClock;
use tasklens_common::error::{TasklensError, TasklensResult};
use tasklens_session_model::{save_metadata, Session};

use crate::backend::DisplayBackend;
use crate::selector::resolve_monitors;
use crate::store::CaptureStore;

/// Configuration for starting a new capture session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Task label for the session (empty gets a synthetic one).
    pub task_name: String,

    /// Base directory session folders are created under.
    pub output_dir: PathBuf,

    /// Seconds between capture ticks.
    pub interval_secs: u64,

    /// Monitor selection spec ("all", "primary", or a list like "1,2").
    pub monitors: String,
}

/// State of a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created but not started.
    Idle,
    /// Capture loop running.
    Capturing,
    /// Session stopped, metadata flushed.
    Stopped,
}

/// A periodic capture session over one or more displays.
///
/// The session owns all mutable state; the only external influence while
/// it runs is the cancellation token handed to [`CaptureSession::run`].
/// Interrupt handlers should only cancel that token, never touch files.
pub struct CaptureSession {
    config: SessionConfig,
    backend: Arc<dyn DisplayBackend>,
    state: SessionState,
    session: Session,
    store: CaptureStore,
    clock: Option<SessionClock>,
    capture_failures: usize,
}

impl CaptureSession {
    /// Create a session: detect displays, resolve the monitor spec, and
    /// create the session directory.
    pub fn new(config: SessionConfig, backend: Arc<dyn DisplayBackend>) -> TasklensResult<Self> {
        if config.interval_secs == 0 {
            return Err(TasklensError::config(
                "Capture interval must be at least 1 second",
            ));
        }

        let displays = backend.displays()?;
        if displays.is_empty() {
            return Err(TasklensError::display("No displays detected"));
        }
        for (i, info) in displays.iter().enumerate() {
            tracing::info!(
                display = i + 1,
                name = %info.name,
                width = info.width,
                height = info.height,
                primary = info.primary,
                "Detected display"
            );
        }

        let resolved = resolve_monitors(&config.monitors, displays.len());
        tracing::info!(spec = %config.monitors, ?resolved, "Resolved capture displays");

        let session = Session::new(
            config.task_name.clone(),
            config.interval_secs,
            config.monitors.clone(),
            resolved.clone(),
        );

        let session_dir = config.output_dir.join(&session.session_id);
        let store = CaptureStore::create(session_dir, resolved.len() > 1)?;

        Ok(Self {
            config,
            backend,
            state: SessionState::Idle,
            session,
            store,
            clock: None,
            capture_failures: 0,
        })
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session record being accumulated.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Directory this session's artifacts live in.
    pub fn session_dir(&self) -> &Path {
        self.store.session_dir()
    }

    /// Captures that failed and were skipped so far.
    pub fn capture_failures(&self) -> usize {
        self.capture_failures
    }

    /// Run the capture loop until `cancel` fires.
    ///
    /// The first capture happens immediately; one more follows every
    /// `interval_secs`. Late ticks are skipped, not backfilled. On
    /// cancellation an in-flight tick finishes and is recorded, then the
    /// session is stopped and metadata flushed. Returns the session
    /// duration in seconds.
    pub async fn run(&mut self, cancel: CancellationToken) -> TasklensResult<f64> {
        if self.state != SessionState::Idle {
            return Err(TasklensError::session("Session already started"));
        }

        let clock = SessionClock::start();
        self.session.start_time = clock.epoch_wall().to_string();
        self.clock = Some(clock);
        self.state = SessionState::Capturing;

        tracing::info!(
            session_id = %self.session.session_id,
            task = %self.session.task_name,
            interval_secs = self.config.interval_secs,
            "Capture session started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // A cancel that raced the timer wins; no new tick starts.
                    if cancel.is_cancelled() {
                        break;
                    }
                    self.capture_tick().await;
                    // Re-check after the tick so a capture that was in
                    // flight when the token fired is still recorded.
                    if cancel.is_cancelled() {
                        break;
                    }
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }

        self.stop()
    }

    /// Stop the session and flush metadata.
    ///
    /// Idempotent: the first call stamps the end time and writes
    /// `metadata.json`; later calls return the recorded duration without
    /// touching disk.
    pub fn stop(&mut self) -> TasklensResult<f64> {
        if self.state == SessionState::Stopped {
            return Ok(self.session.duration_seconds.unwrap_or(0.0));
        }

        let duration = self.clock.as_ref().map(|c| c.elapsed_secs()).unwrap_or(0.0);
        self.session
            .finalize(chrono::Local::now().to_rfc3339(), duration);
        self.state = SessionState::Stopped;

        save_metadata(&self.session, self.store.session_dir())
            .map_err(|e| TasklensError::session(format!("Failed to save metadata: {e}")))?;

        tracing::info!(
            session_id = %self.session.session_id,
            duration_secs = duration,
            captures = self.session.capture_count,
            failures = self.capture_failures,
            "Capture session stopped"
        );

        Ok(duration)
    }

    /// One capture pass over every resolved display.
    ///
    /// Capture and encode are blocking, so each display's work runs on
    /// the blocking pool. A failed display is logged and skipped; the
    /// tick simply yields fewer records.
    async fn capture_tick(&mut self) {
        let stamp = chrono::Local::now().format("%H%M%S").to_string();
        let targets = self.session.resolved_monitors.clone();
        let clock = match self.clock.clone() {
            Some(clock) => clock,
            None => return,
        };

        for display_index in targets {
            let backend = Arc::clone(&self.backend);
            let store = self.store.clone();
            let stamp = stamp.clone();
            let clock = clock.clone();

            let result = tokio::task::spawn_blocking(move || {
                store.capture_one(backend.as_ref(), display_index, &stamp, &clock)
            })
            .await;

            match result {
                Ok(Ok(record)) => {
                    tracing::debug!(path = %record.path, monitor = record.monitor, "Captured display");
                    self.session.push_capture(record);
                }
                Ok(Err(e)) => {
                    self.capture_failures += 1;
                    tracing::warn!(display = display_index + 1, error = %e, "Capture failed, skipping");
                }
                Err(e) => {
                    self.capture_failures += 1;
                    tracing::warn!(display = display_index + 1, error = %e, "Capture task failed, skipping");
                }
            }
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            task_name: String::new(),
            output_dir: PathBuf::from("task_captures"),
            interval_secs: 30,
            monitors: "all".to_string(),
        }
    }
}
