//! TaskLens Review
//!
//! Turns a finished capture session into review artifacts:
//! - **Report:** Markdown review over an evenly spaced sample of captures
//! - **Bundle:** sampled captures base64-encoded for the summarization API
//! - **Claude:** optional AI summary through the Anthropic Messages API

pub mod bundle;
pub mod claude;
pub mod report;

pub use bundle::*;
pub use claude::*;
pub use report::*;
