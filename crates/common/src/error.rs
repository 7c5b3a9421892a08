//! Error types shared across TaskLens crates.

use std::path::PathBuf;

/// Top-level error type for TaskLens operations.
#[derive(Debug, thiserror::Error)]
pub enum TasklensError {
    #[error("Capture error: {message}")]
    Capture { message: String },

    #[error("Display error: {message}")]
    Display { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Review error: {message}")]
    Review { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using TasklensError.
pub type TasklensResult<T> = Result<T, TasklensError>;

impl TasklensError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display {
            message: msg.into(),
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session {
            message: msg.into(),
        }
    }

    pub fn review(msg: impl Into<String>) -> Self {
        Self::Review {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
