//! Start a capture session.

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use tasklens_capture_engine::{CaptureSession, SessionConfig, XcapBackend};
use tasklens_common::config::AppConfig;

pub async fn run(
    task_name: String,
    interval: Option<u64>,
    monitors: Option<String>,
    output: Option<PathBuf>,
    samples: Option<usize>,
) -> anyhow::Result<()> {
    let app_config = AppConfig::load();

    let config = SessionConfig {
        task_name,
        output_dir: output.unwrap_or_else(|| app_config.output_dir.clone()),
        interval_secs: interval.unwrap_or(app_config.capture.interval_secs),
        monitors: monitors.unwrap_or_else(|| app_config.capture.monitors.clone()),
    };
    let samples = samples.unwrap_or(app_config.capture.sample_count);

    let backend = Arc::new(XcapBackend::new());
    let mut session = CaptureSession::new(config, backend)?;

    println!("Starting capture session: {}", session.session().task_name);
    println!("  Session ID: {}", session.session().session_id);
    println!("  Interval: {}s", session.session().capture_interval_secs);
    println!("  Monitors: {}", session.session().monitors_config);
    println!("  Output: {}", session.session_dir().display());
    println!();
    println!("Press Ctrl+C to stop capturing...");
    println!();

    // The interrupt listener only cancels the token; the capture loop owns
    // every file write and finishes the in-flight tick before stopping.
    let cancel = CancellationToken::new();
    spawn_interrupt_listener(cancel.clone())?;

    let duration = session.run(cancel).await?;

    println!();
    println!(
        "Captured {} screenshot(s) over {:.1} minutes",
        session.session().capture_count,
        duration / 60.0
    );
    if session.capture_failures() > 0 {
        println!(
            "Skipped {} failed capture(s); see the log for details",
            session.capture_failures()
        );
    }

    let dir = session.session_dir().to_path_buf();
    super::generate_artifacts(session.session(), &dir, samples).await
}

/// Cancels the token on Ctrl+C or SIGTERM. The SIGTERM stream is
/// registered before this returns.
#[cfg(unix)]
fn spawn_interrupt_listener(cancel: CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
        cancel.cancel();
    });
    Ok(())
}

/// Cancels the token on Ctrl+C.
#[cfg(not(unix))]
fn spawn_interrupt_listener(cancel: CancellationToken) -> std::io::Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });
    Ok(())
}
