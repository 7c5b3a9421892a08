//! Atomic persistence of session metadata.
//!
//! A session's `metadata.json` is rewritten every time the session is
//! flushed. Writes go through a temp file and a rename so a concurrent
//! reader never observes a partially written document.

use std::path::{Path, PathBuf};

use crate::session::Session;

/// Name of the metadata file inside a session directory.
pub const METADATA_FILE: &str = "metadata.json";

/// Errors that can occur persisting or loading session metadata.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Serialize `session` to `<dir>/metadata.json`, atomically replacing any
/// previous version.
pub fn save_metadata(session: &Session, dir: impl AsRef<Path>) -> Result<(), MetadataError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| MetadataError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(METADATA_FILE);
    let json = serde_json::to_string_pretty(session).map_err(|e| MetadataError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let tmp = dir.join("metadata.json.tmp");
    std::fs::write(&tmp, json).map_err(|e| MetadataError::IoError {
        path: tmp.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp, &path).map_err(|e| MetadataError::IoError { path, source: e })?;

    Ok(())
}

/// Load a session back from `<dir>/metadata.json`.
pub fn load_metadata(dir: impl AsRef<Path>) -> Result<Session, MetadataError> {
    let path = dir.as_ref().join(METADATA_FILE);
    let json = std::fs::read_to_string(&path).map_err(|e| MetadataError::IoError {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&json).map_err(|e| MetadataError::ParseError { path, source: e })
}
