//! Anthropic Messages API client for session summaries.
//!
//! Sends the sampled captures plus the analysis prompt to Claude and
//! writes the returned summary next to the session's other artifacts.
//! Requires `ANTHROPIC_API_KEY`; callers are expected to check
//! [`has_api_key`] and skip summarization when it is unset.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use tasklens_common::error::{TasklensError, TasklensResult};

use crate::bundle::AnalysisBundle;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-sonnet-4-5-20250929";
const MAX_TOKENS: u32 = 2000;
const TIMEOUT_SECS: u64 = 60;

/// Name of the summary file inside a session directory.
pub const SUMMARY_FILE: &str = "summary.txt";

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "image")]
    Image { source: ImageSource },
    #[serde(rename = "text")]
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    source_type: String,
    media_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    text: String,
}

/// Whether summarization is available in this environment.
pub fn has_api_key() -> bool {
    std::env::var("ANTHROPIC_API_KEY").is_ok()
}

/// Client for Claude-based session summarization.
pub struct ClaudeSummarizer {
    client: Client,
    api_key: String,
}

impl ClaudeSummarizer {
    /// Build a client from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> TasklensResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| TasklensError::config("ANTHROPIC_API_KEY is not set"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| TasklensError::review(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, api_key })
    }

    /// Send a bundle for summarization and return the summary text.
    pub async fn summarize(&self, bundle: &AnalysisBundle) -> TasklensResult<String> {
        tracing::info!(images = bundle.images.len(), "Requesting session summary");

        let request = build_request(bundle);
        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| TasklensError::review(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TasklensError::review(format!("API error {status}: {body}")));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| TasklensError::review(format!("Failed to parse response: {e}")))?;

        first_text(&parsed).ok_or_else(|| TasklensError::review("Empty response from model"))
    }
}

fn build_request(bundle: &AnalysisBundle) -> MessagesRequest {
    let mut content = Vec::with_capacity(bundle.images.len() + 1);
    for image in &bundle.images {
        content.push(ContentBlock::Image {
            source: ImageSource {
                source_type: "base64".to_string(),
                media_type: "image/png".to_string(),
                data: image.data.clone(),
            },
        });
    }
    content.push(ContentBlock::Text {
        text: bundle.prompt.clone(),
    });

    MessagesRequest {
        model: MODEL.to_string(),
        max_tokens: MAX_TOKENS,
        messages: vec![Message {
            role: "user".to_string(),
            content,
        }],
    }
}

fn first_text(response: &MessagesResponse) -> Option<String> {
    response
        .content
        .iter()
        .map(|block| block.text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Write a summary into `dir` as `summary.txt`.
pub fn save_summary(summary: &str, dir: impl AsRef<Path>) -> TasklensResult<PathBuf> {
    let path = dir.as_ref().join(SUMMARY_FILE);
    std::fs::write(&path, summary)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::EncodedImage;

    fn sample_bundle() -> AnalysisBundle {
        AnalysisBundle {
            prompt: "Summarize this session.".to_string(),
            images: vec![EncodedImage {
                path: "screen_090000.png".to_string(),
                data: "aGVsbG8=".to_string(),
            }],
        }
    }

    #[test]
    fn test_request_shape() {
        let request = build_request(&sample_bundle());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "claude-sonnet-4-5-20250929");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["messages"][0]["role"], "user");

        let content = &json["messages"][0]["content"];
        assert_eq!(content[0]["type"], "image");
        assert_eq!(content[0]["source"]["type"], "base64");
        assert_eq!(content[0]["source"]["media_type"], "image/png");
        assert_eq!(content[0]["source"]["data"], "aGVsbG8=");
        assert_eq!(content[1]["type"], "text");
        assert_eq!(content[1]["text"], "Summarize this session.");
    }

    #[test]
    fn test_response_text_extraction() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"  Worked on the parser.  "}]}"#,
        )
        .unwrap();
        assert_eq!(first_text(&parsed), Some("Worked on the parser.".to_string()));

        let empty: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"text","text":""}]}"#).unwrap();
        assert_eq!(first_text(&empty), None);
    }

    #[test]
    fn test_save_summary_writes_file() {
        let dir = std::env::temp_dir().join("tasklens_test_summary");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = save_summary("Worked on the parser.", &dir).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Worked on the parser."
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    #[ignore = "requires ANTHROPIC_API_KEY and network access"]
    async fn test_live_summarization() {
        let summarizer = ClaudeSummarizer::from_env().unwrap();
        let bundle = AnalysisBundle {
            prompt: "Reply with the single word: ready".to_string(),
            images: vec![],
        };
        let summary = summarizer.summarize(&bundle).await.unwrap();
        assert!(!summary.is_empty());
    }
}
