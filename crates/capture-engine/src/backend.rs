//! Display enumeration and capture seam.
//!
//! The session loop talks to displays through [`DisplayBackend`] so the
//! loop can be exercised without a display server. The production
//! implementation goes through `xcap`.

use image::RgbaImage;

use tasklens_common::error::{TasklensError, TasklensResult};

/// Information about one attached display.
#[derive(Debug, Clone)]
pub struct DisplayInfo {
    /// Display name/identifier.
    pub name: String,
    /// Resolution in physical pixels.
    pub width: u32,
    pub height: u32,
    /// Position in the virtual desktop (pixels).
    pub x: i32,
    pub y: i32,
    /// Scale factor (for example 1.0, 1.25, 2.0).
    pub scale_factor: f32,
    /// Whether this display is primary.
    pub primary: bool,
}

/// Abstract interface to the machine's displays.
pub trait DisplayBackend: Send + Sync {
    /// Enumerate attached displays, in platform order.
    fn displays(&self) -> TasklensResult<Vec<DisplayInfo>>;

    /// Capture one still image of the display at `index` (0-based).
    fn capture(&self, index: usize) -> TasklensResult<RgbaImage>;
}

/// Production backend capturing through the platform screen APIs.
///
/// Stateless; displays are re-enumerated on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcapBackend;

impl XcapBackend {
    pub fn new() -> Self {
        Self
    }

    fn monitors() -> TasklensResult<Vec<xcap::Monitor>> {
        xcap::Monitor::all()
            .map_err(|e| TasklensError::display(format!("Failed to enumerate displays: {e}")))
    }
}

impl DisplayBackend for XcapBackend {
    fn displays(&self) -> TasklensResult<Vec<DisplayInfo>> {
        let mut displays = Vec::new();
        for monitor in Self::monitors()? {
            displays.push(DisplayInfo {
                name: monitor.name().unwrap_or_else(|_| "unknown".to_string()),
                width: monitor.width().map_err(xcap_err)?,
                height: monitor.height().map_err(xcap_err)?,
                x: monitor.x().map_err(xcap_err)?,
                y: monitor.y().map_err(xcap_err)?,
                scale_factor: monitor.scale_factor().unwrap_or(1.0),
                primary: monitor.is_primary().unwrap_or(false),
            });
        }
        Ok(displays)
    }

    fn capture(&self, index: usize) -> TasklensResult<RgbaImage> {
        let monitors = Self::monitors()?;
        let monitor = monitors
            .get(index)
            .ok_or_else(|| TasklensError::display(format!("No display at index {index}")))?;
        monitor.capture_image().map_err(|e| {
            TasklensError::capture(format!("Failed to capture display {}: {e}", index + 1))
        })
    }
}

fn xcap_err(e: xcap::XCapError) -> TasklensError {
    TasklensError::display(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires a graphical session and screen recording permissions"]
    fn test_enumerate_and_capture_first_display() {
        let backend = XcapBackend::new();
        let displays = backend.displays().expect("displays");
        assert!(!displays.is_empty());
        let image = backend.capture(0).expect("capture");
        assert!(image.width() > 0 && image.height() > 0);
    }
}
