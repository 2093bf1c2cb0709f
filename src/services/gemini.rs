//! Remote generation transport.
//!
//! The planner talks to the Gemini `generateContent` endpoint through the
//! [`GenerateText`] trait so tests can swap in deterministic fakes for the
//! network boundary.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::{PlannerConfig, SYSTEM_PROMPT};

/// Case-insensitive signals that mark a failure as quota/throttling.
pub const RATE_LIMIT_SIGNALS: [&str; 3] = ["quota", "429", "rate"];

/// Errors that can occur during a remote generation call.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RemoteError {
    /// Check whether this failure looks like a rate limit.
    ///
    /// Matches the rendered message against [`RATE_LIMIT_SIGNALS`]. An HTTP
    /// 429 renders its status into the message, so structured rate limits
    /// classify correctly through the same path.
    pub fn is_rate_limited(&self) -> bool {
        let message = self.to_string().to_lowercase();
        RATE_LIMIT_SIGNALS
            .iter()
            .any(|signal| message.contains(signal))
    }
}

/// Capability seam for "generate content from prompt".
#[async_trait]
pub trait GenerateText: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, RemoteError>;
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, config: &PlannerConfig) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(RemoteError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        })
    }
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, RemoteError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api { status, message });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(RemoteError::InvalidResponse(
                "response contained no text candidates".to_string(),
            ));
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
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_and_429_failures_classify_as_rate_limited() {
        let err = RemoteError::Api {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert!(err.is_rate_limited());

        let err = RemoteError::Api {
            status: 400,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        };
        assert!(err.is_rate_limited());

        let err = RemoteError::InvalidResponse("Rate limit hit for this model".to_string());
        assert!(err.is_rate_limited());
    }

    #[test]
    fn other_failures_are_not_rate_limited() {
        let err = RemoteError::Api {
            status: 500,
            message: "internal server failure".to_string(),
        };
        assert!(!err.is_rate_limited());

        let err = RemoteError::InvalidResponse("response contained no text candidates".to_string());
        assert!(!err.is_rate_limited());
    }
}
