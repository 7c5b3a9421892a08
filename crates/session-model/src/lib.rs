//! TaskLens Session Model
//!
//! Serializable data model for capture sessions:
//! - Per-capture records and the session aggregate
//! - Deterministic even sampling for reviews
//! - Atomic metadata persistence

pub mod persist;
pub mod record;
pub mod sampling;
pub mod session;

pub use persist::*;
pub use record::*;
pub use sampling::*;
pub use session::*;
