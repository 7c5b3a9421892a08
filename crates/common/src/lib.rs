//! TaskLens Common Utilities
//!
//! Shared infrastructure for all TaskLens crates:
//! - Error types and result aliases
//! - Session clock for relative capture timing
//! - Tracing/logging initialization
//! - Configuration and monitor-preset loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
