//! Gemini client — the single point of entry for all text-generation calls.
//!
//! No other module may call the Gemini API directly. The project manager
//! depends only on the `DescriptionGenerator` trait, so tests swap in stubs
//! and the backend can change without touching callers.
//!
//! There is deliberately no retry loop: a failed generation surfaces to the
//! user, who re-triggers the action manually.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

/// Inputs for a single description-generation call.
///
/// The existing description, when present, is passed as a hint only — it is
/// never overwritten unless the call succeeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub project_name: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub existing_description: Option<String>,
}

/// The text-generation collaborator seam. Carried in `AppState` as
/// `Arc<dyn DescriptionGenerator>`.
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn describe(&self, req: &DescriptionRequest) -> Result<String, GenerationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The Gemini-backed description generator used in production.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiClient {
    async fn describe(&self, req: &DescriptionRequest) -> Result<String, GenerationError> {
        let prompt = build_prompt(req);
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed.text().ok_or(GenerationError::EmptyContent)?;

        debug!("Description generated ({} chars)", text.len());
        Ok(text.trim().to_string())
    }
}

/// Builds the generation prompt from the project form fields.
fn build_prompt(req: &DescriptionRequest) -> String {
    let mut prompt = format!(
        "Write a concise, professional description (max 2 sentences) for a GitHub \
         project with the following details:\n\
         Project Name: {}\n\
         Project Type: {}\n",
        req.project_name, req.project_type
    );
    if let Some(existing) = req
        .existing_description
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        prompt.push_str(&format!("Current Description: {existing}\n"));
    }
    prompt.push_str(
        "\nFocus on the project's purpose and main technologies used. Keep it factual and clear.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_name_and_type() {
        let req = DescriptionRequest {
            project_name: "octoresume".to_string(),
            project_type: "Personal Project".to_string(),
            existing_description: None,
        };
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Project Name: octoresume"));
        assert!(prompt.contains("Project Type: Personal Project"));
        assert!(!prompt.contains("Current Description"));
    }

    #[test]
    fn test_prompt_includes_existing_description_as_hint() {
        let req = DescriptionRequest {
            project_name: "octoresume".to_string(),
            project_type: String::new(),
            existing_description: Some("A resume builder".to_string()),
        };
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Current Description: A resume builder"));
    }

    #[test]
    fn test_prompt_treats_empty_existing_description_as_absent() {
        let req = DescriptionRequest {
            project_name: "octoresume".to_string(),
            project_type: String::new(),
            existing_description: Some(String::new()),
        };
        assert!(!build_prompt(&req).contains("Current Description"));
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "A tidy description." }] }
            }]
        });
        let parsed: GeminiResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.text(), Some("A tidy description."));
    }

    #[test]
    fn test_empty_candidates_is_empty_content() {
        let parsed: GeminiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed.text(), None);
    }
}
