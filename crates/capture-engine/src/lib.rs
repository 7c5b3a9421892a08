//! TaskLens Capture Engine
//!
//! Drives periodic screen capture sessions: resolves which displays a
//! session should cover, takes one still per display per tick, and
//! accumulates capture records until the session is stopped.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │               CaptureSession                  │
//! │   resolve spec ──▶ tick loop ──▶ stop()       │
//! │        │               │            │         │
//! │        ▼               ▼            ▼         │
//! │  DisplayBackend   CaptureStore   metadata     │
//! │  (enumerate +     (PNG files)    (flushed     │
//! │   capture)                        once)       │
//! └───────────────────────────────────────────────┘
//! ```

pub mod backend;
pub mod selector;
pub mod session;
pub mod store;

pub use backend::{DisplayBackend, DisplayInfo, XcapBackend};
pub use session::*;
