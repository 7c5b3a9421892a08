//! Detect and test displays.

use std::time::Duration;

use tasklens_capture_engine::backend::{DisplayBackend, XcapBackend};

pub fn detect() -> anyhow::Result<()> {
    let backend = XcapBackend::new();
    let displays = backend.displays()?;

    println!("Detected {} display(s):", displays.len());
    for (i, display) in displays.iter().enumerate() {
        println!(
            "  {}. {} {}x{} at ({}, {}) (scale: {}x) {}",
            i + 1,
            display.name,
            display.width,
            display.height,
            display.x,
            display.y,
            display.scale_factor,
            if display.primary { "(primary)" } else { "" }
        );
    }
    println!();
    println!("Display #1 is used for the \"primary\" monitor spec.");
    println!("Run 'tasklens monitors test-all' to identify each display visually.");

    Ok(())
}

pub fn test(display: usize) -> anyhow::Result<()> {
    let backend = XcapBackend::new();
    let count = backend.displays()?.len();
    capture_test_shot(&backend, display, count)
}

pub async fn test_all() -> anyhow::Result<()> {
    let backend = XcapBackend::new();
    let count = backend.displays()?.len();

    println!("Capturing test screenshots from all {count} display(s)...");
    println!();

    for display in 1..=count {
        if let Err(e) = capture_test_shot(&backend, display, count) {
            println!("Failed to capture display {display}: {e}");
            continue;
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    println!();
    println!("Review the test_monitor_*.png files to identify which display is which.");

    Ok(())
}

/// Capture one display (1-based) to `test_monitor_<N>.png` in the working
/// directory.
fn capture_test_shot(
    backend: &dyn DisplayBackend,
    display: usize,
    count: usize,
) -> anyhow::Result<()> {
    if display < 1 || display > count {
        anyhow::bail!("Invalid display number {display}. Available: 1-{count}");
    }

    let image = backend.capture(display - 1)?;
    let filename = format!("test_monitor_{display}.png");
    image
        .save(&filename)
        .map_err(|e| anyhow::anyhow!("Failed to save {filename}: {e}"))?;

    println!(
        "Saved {filename} ({}x{}); open it to verify which display this is",
        image.width(),
        image.height()
    );

    Ok(())
}
