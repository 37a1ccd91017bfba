//! Shared text-generation client and collaborator trait
//!
//! All AI-backed services talk to the generative model through the
//! `TextGenerator` trait so they can be exercised with canned responses in
//! tests. The production implementation calls the Gemini `generateContent`
//! REST endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Generation API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Generation response contained no text")]
    EmptyResponse,
}

/// Trait for text-generation collaborators
///
/// `system` carries an optional system instruction; `prompt` is the user
/// request. Implementations return the generated text verbatim.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, GeneratorError>;
}

/// Gemini REST client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client with the provided API key
    ///
    /// The endpoint base URL can be overridden via GEMINI_BASE_URL.
    pub fn new(api_key: &str) -> Result<Self, String> {
        let base_url =
            std::env::var(ENV_GEMINI_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| format!("Invalid generation endpoint URL '{}': {}", base_url, e))?;

        let client = Client::builder()
            .user_agent("contract-intel/1.0")
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            model
        );

        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(system) = system {
            body["systemInstruction"] = serde_json::json!({ "parts": [{ "text": system }] });
        }

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(GeneratorError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                message: message.chars().take(500).collect(),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
