//! Analysis bundles: sampled captures encoded for summarization.

use base64::{engine::general_purpose, Engine as _};

use tasklens_session_model::{sampling, Session};

use crate::report;

/// One capture image encoded for transport.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Path of the source file.
    pub path: String,
    /// Base64-encoded PNG bytes.
    pub data: String,
}

/// Prompt plus encoded sample images, ready for a summarization request.
#[derive(Debug, Clone)]
pub struct AnalysisBundle {
    pub prompt: String,
    pub images: Vec<EncodedImage>,
}

/// Build a bundle from an evenly spaced sample of the session's captures.
///
/// Unreadable image files are skipped with a warning so a partially
/// cleaned-up session can still be summarized from what remains.
pub fn build_bundle(session: &Session, sample_count: usize) -> AnalysisBundle {
    let sampled = sampling::sample(&session.captures, sample_count);

    let mut images = Vec::with_capacity(sampled.len());
    for record in &sampled {
        match std::fs::read(&record.path) {
            Ok(bytes) => images.push(EncodedImage {
                path: record.path.clone(),
                data: general_purpose::STANDARD.encode(&bytes),
            }),
            Err(e) => {
                tracing::warn!(path = %record.path, error = %e, "Skipping unreadable capture");
            }
        }
    }

    AnalysisBundle {
        prompt: report::analysis_prompt(session),
        images,
    }
}
