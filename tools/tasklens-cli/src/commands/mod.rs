//! CLI subcommand implementations.

pub mod analyze;
pub mod info;
pub mod monitors;
pub mod preset;
pub mod start;

use std::path::Path;

use tasklens_session_model::Session;

/// Write the review document and, when an API key is available, the AI
/// summary into the session directory. Summarization failures are reported
/// but never fail the command; the review on disk is already complete.
pub(crate) async fn generate_artifacts(
    session: &Session,
    dir: &Path,
    samples: usize,
) -> anyhow::Result<()> {
    let review_path = tasklens_review::write_review(session, dir, samples)?;
    println!("Review written to: {}", review_path.display());

    if !tasklens_review::has_api_key() {
        println!("Set ANTHROPIC_API_KEY to enable AI summaries.");
        return Ok(());
    }

    let bundle = tasklens_review::build_bundle(session, samples);
    let summarizer = tasklens_review::ClaudeSummarizer::from_env()?;
    match summarizer.summarize(&bundle).await {
        Ok(summary) => {
            let summary_path = tasklens_review::save_summary(&summary, dir)?;
            println!("Summary written to: {}", summary_path.display());
            println!();
            println!("{summary}");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Summarization failed");
            println!("Summarization failed: {e}");
            println!("The review and captures are saved; retry with 'tasklens analyze'.");
        }
    }

    Ok(())
}
