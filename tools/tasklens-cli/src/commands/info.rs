//! Show saved session information.

use std::path::PathBuf;

use tasklens_common::config::AppConfig;
use tasklens_common::error::TasklensError;
use tasklens_session_model::load_metadata;

pub fn run(session_id: String, output: Option<PathBuf>) -> anyhow::Result<()> {
    let app_config = AppConfig::load();
    let output = output.unwrap_or(app_config.output_dir);

    let dir = output.join(&session_id);
    if !dir.exists() {
        return Err(TasklensError::FileNotFound { path: dir }.into());
    }
    let session = load_metadata(&dir)
        .map_err(|e| anyhow::anyhow!("Failed to load session {session_id}: {e}"))?;

    println!("Task: {}", session.task_name);
    println!("  Session ID: {}", session.session_id);
    println!("  Directory: {}", dir.display());
    println!("  Started: {}", session.start_time);
    match &session.end_time {
        Some(end) => println!("  Ended: {end}"),
        None => println!("  Ended: (no end recorded; session was interrupted)"),
    }
    println!("  Duration: {:.1} minutes", session.duration_minutes());
    println!();

    println!("Capture:");
    println!("  Interval: {}s", session.capture_interval_secs);
    let displays: Vec<String> = session
        .resolved_monitors
        .iter()
        .map(|i| (i + 1).to_string())
        .collect();
    println!(
        "  Monitors: {} (displays {})",
        session.monitors_config,
        displays.join(", ")
    );
    println!("  Captures: {}", session.capture_count);

    if let (Some(first), Some(last)) = (session.captures.first(), session.captures.last()) {
        println!(
            "  First: {} (+{:.1} min)",
            first.timestamp,
            first.elapsed_minutes()
        );
        println!(
            "  Last: {} (+{:.1} min)",
            last.timestamp,
            last.elapsed_minutes()
        );
    }

    Ok(())
}
