//! Markdown review generation from session metadata.

use std::path::{Path, PathBuf};

use tasklens_common::error::TasklensResult;
use tasklens_session_model::{sampling, CaptureRecord, Session};

/// Name of the review document inside a session directory.
pub const REVIEW_FILE: &str = "review.md";

/// Generate Markdown review content for a session over sampled captures.
pub fn render_review(session: &Session, sampled: &[CaptureRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Task Review: {}\n\n", session.task_name));
    output.push_str(&format!("**Session ID:** {}\n", session.session_id));
    output.push_str(&format!(
        "**Duration:** {:.1} minutes\n",
        session.duration_minutes()
    ));
    output.push_str(&format!("**Total Captures:** {}\n", session.capture_count));
    output.push_str(&format!("**Sampled for Review:** {}\n\n", sampled.len()));

    output.push_str("## Captured Screenshots\n\n");
    for (i, record) in sampled.iter().enumerate() {
        output.push_str(&format!(
            "### Capture {} (+{:.1} min)\n",
            i + 1,
            record.elapsed_minutes(),
        ));
        output.push_str(&format!("- **Monitor:** {}\n", record.monitor));
        output.push_str(&format!("- **Resolution:** {}\n", record.resolution));
        output.push_str(&format!(
            "- **Time:** {}\n",
            format_clock_time(&record.timestamp)
        ));
        output.push_str(&format!(
            "- **File:** ![Screenshot]({})\n\n",
            file_name(&record.path)
        ));
    }

    output.push_str("## Analysis Prompt\n\n");
    output.push_str(&analysis_prompt(session));

    output
}

/// Build the analysis instructions sent alongside the sampled captures.
pub fn analysis_prompt(session: &Session) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "These screenshots were captured during the work session \"{}\" \
         ({:.1} minutes, {} captures total).\n\n",
        session.task_name,
        session.duration_minutes(),
        session.capture_count,
    ));
    prompt.push_str("Please analyze them and provide:\n\n");
    prompt.push_str("1. A summary of what was accomplished\n");
    prompt.push_str("2. Key activities observed\n");
    prompt.push_str("3. Applications and tools used\n");
    prompt.push_str("4. How the monitors were used, when more than one was captured\n");
    prompt.push_str("5. How the work progressed over the session\n");
    prompt.push_str("6. A short summary suitable for a task log entry\n");

    prompt
}

/// Format an RFC 3339 timestamp as wall-clock HH:MM:SS.
fn format_clock_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// File name component of a capture path.
fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Sample the session's captures and write `review.md` into `dir`.
pub fn write_review(
    session: &Session,
    dir: impl AsRef<Path>,
    sample_count: usize,
) -> TasklensResult<PathBuf> {
    let sampled = sampling::sample(&session.captures, sample_count);
    let content = render_review(session, &sampled);
    let path = dir.as_ref().join(REVIEW_FILE);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_captures() -> Session {
        let mut session = Session::new("Writing docs", 30, "all", vec![0]);
        session.push_capture(CaptureRecord {
            path: "task_captures/20260822_141500/screen_141500.png".to_string(),
            monitor: 1,
            timestamp: "2026-08-22T14:15:00+02:00".to_string(),
            relative_time: 0.0,
            resolution: "1920x1080".to_string(),
        });
        session.push_capture(CaptureRecord {
            path: "task_captures/20260822_141500/screen_141630.png".to_string(),
            monitor: 1,
            timestamp: "2026-08-22T14:16:30+02:00".to_string(),
            relative_time: 90.0,
            resolution: "1920x1080".to_string(),
        });
        session.finalize("2026-08-22T14:17:00+02:00", 120.0);
        session
    }

    #[test]
    fn test_review_header() {
        let session = session_with_captures();
        let review = render_review(&session, &session.captures);

        assert!(review.starts_with("# Task Review: Writing docs\n"));
        assert!(review.contains("**Duration:** 2.0 minutes"));
        assert!(review.contains("**Total Captures:** 2"));
        assert!(review.contains("**Sampled for Review:** 2"));
    }

    #[test]
    fn test_review_capture_entries() {
        let session = session_with_captures();
        let review = render_review(&session, &session.captures);

        assert!(review.contains("### Capture 1 (+0.0 min)"));
        assert!(review.contains("### Capture 2 (+1.5 min)"));
        assert!(review.contains("- **Monitor:** 1"));
        assert!(review.contains("- **Resolution:** 1920x1080"));
        assert!(review.contains("- **Time:** 14:16:30"));
        assert!(review.contains("![Screenshot](screen_141500.png)"));
    }

    #[test]
    fn test_analysis_prompt_names_the_task() {
        let session = session_with_captures();
        let prompt = analysis_prompt(&session);

        assert!(prompt.contains("\"Writing docs\""));
        assert!(prompt.contains("2 captures total"));
        assert!(prompt.contains("1. A summary of what was accomplished"));
    }

    #[test]
    fn test_clock_time_falls_back_to_raw_string() {
        assert_eq!(format_clock_time("2026-08-22T14:15:30+02:00"), "14:15:30");
        assert_eq!(format_clock_time("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn test_write_review_creates_file() {
        let dir = std::env::temp_dir().join("tasklens_test_review_write");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let session = session_with_captures();
        let path = write_review(&session, &dir, 5).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Analysis Prompt"));
        assert_eq!(path.file_name().unwrap(), REVIEW_FILE);

        std::fs::remove_dir_all(&dir).ok();
    }
}
