//! Capture persistence: session directory layout and image naming.

use std::path::{Path, PathBuf};

use tasklens_common::clock::SessionClock;
use tasklens_common::error::{TasklensError, TasklensResult};
use tasklens_session_model::CaptureRecord;

use crate::backend::DisplayBackend;

/// Writes captured stills into a session directory under deterministic
/// names.
///
/// Single-monitor sessions name files `screen_<HHMMSS>.png`; sessions
/// covering more than one display add the display number:
/// `screen_m<N>_<HHMMSS>.png`. The stamp is computed once per tick by the
/// caller so all files from one tick share it.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    session_dir: PathBuf,
    multi_monitor: bool,
}

impl CaptureStore {
    /// Create a store rooted at `session_dir`, creating the directory.
    pub fn create(session_dir: impl Into<PathBuf>, multi_monitor: bool) -> TasklensResult<Self> {
        let session_dir = session_dir.into();
        std::fs::create_dir_all(&session_dir)?;
        Ok(Self {
            session_dir,
            multi_monitor,
        })
    }

    /// Directory this store writes into.
    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    fn filename(&self, monitor: u32, stamp: &str) -> String {
        if self.multi_monitor {
            format!("screen_m{monitor}_{stamp}.png")
        } else {
            format!("screen_{stamp}.png")
        }
    }

    /// Capture one display through `backend` and persist it as PNG,
    /// returning the record for the saved file.
    pub fn capture_one(
        &self,
        backend: &dyn DisplayBackend,
        display_index: usize,
        stamp: &str,
        clock: &SessionClock,
    ) -> TasklensResult<CaptureRecord> {
        let image = backend.capture(display_index)?;
        let monitor = display_index as u32 + 1;
        let path = self.session_dir.join(self.filename(monitor, stamp));

        image.save(&path).map_err(|e| {
            TasklensError::capture(format!("Failed to save {}: {e}", path.display()))
        })?;

        // Both time fields are stamped together, after the save completes.
        Ok(CaptureRecord {
            path: path.display().to_string(),
            monitor,
            timestamp: chrono::Local::now().to_rfc3339(),
            relative_time: clock.elapsed_secs(),
            resolution: format!("{}x{}", image.width(), image.height()),
        })
    }
}
