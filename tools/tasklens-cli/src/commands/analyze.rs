//! Regenerate review artifacts for a saved session.

use std::path::PathBuf;

use tasklens_common::config::AppConfig;
use tasklens_common::error::TasklensError;
use tasklens_session_model::load_metadata;

pub async fn run(
    session_id: String,
    output: Option<PathBuf>,
    samples: Option<usize>,
) -> anyhow::Result<()> {
    let app_config = AppConfig::load();
    let output = output.unwrap_or(app_config.output_dir);
    let samples = samples.unwrap_or(app_config.capture.sample_count);

    let dir = output.join(&session_id);
    if !dir.exists() {
        return Err(TasklensError::FileNotFound { path: dir }.into());
    }
    let session = load_metadata(&dir)
        .map_err(|e| anyhow::anyhow!("Failed to load session {session_id}: {e}"))?;

    println!("Analyzing session: {}", session.task_name);
    println!("  Captures: {}", session.capture_count);
    println!("  Duration: {:.1} minutes", session.duration_minutes());
    println!();

    super::generate_artifacts(&session, &dir, samples).await
}
