//! Pass-through client for the generative-language chat API.

use crate::config::ChatConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Message returned to callers whenever the upstream call fails
pub const CHAT_FALLBACK_ERROR: &str = "Failed to fetch from Gemini API";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing API credential in environment variable {0}")]
    MissingCredential(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    prompt: PromptText<'a>,
    temperature: f64,
    candidate_count: u32,
}

#[derive(Debug, Serialize)]
struct PromptText<'a> {
    text: &'a str,
}

/// Upstream reply. A body without `candidates` is malformed and fails to decode.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub output: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, if the upstream produced one
    pub fn first_output(self) -> Option<String> {
        self.candidates.into_iter().next().and_then(|c| c.output)
    }
}

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Forward one prompt and return the first candidate's text
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ChatError::MissingCredential(self.config.api_key_env.clone()))?;

        let body = GenerateRequest {
            prompt: PromptText { text: prompt },
            temperature: self.config.temperature,
            candidate_count: self.config.candidate_count,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::UpstreamStatus(response.status().as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.first_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let body = GenerateRequest {
            prompt: PromptText { text: "hello" },
            temperature: 0.7,
            candidate_count: 1,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompt": {"text": "hello"},
                "temperature": 0.7,
                "candidateCount": 1
            })
        );
    }

    #[test]
    fn test_first_output() {
        let json = r#"{"candidates": [{"output": "first", "author": "1"}, {"output": "second"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_output(), Some("first".to_string()));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(empty.first_output(), None);
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        assert!(serde_json::from_str::<GenerateResponse>("{}").is_err());
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let client = ChatClient::new(ChatConfig {
            api_key_env: "STOREFRONT_TEST_CHAT_KEY_UNSET".to_string(),
            ..ChatConfig::default()
        })
        .unwrap();

        match client.generate("hi").await {
            Err(ChatError::MissingCredential(name)) => {
                assert_eq!(name, "STOREFRONT_TEST_CHAT_KEY_UNSET")
            }
            other => panic!("Expected missing credential, got {:?}", other),
        }
    }
}
