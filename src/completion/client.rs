//! HTTP client for the chat-completion endpoint.
//!
//! One request per generation, no automatic retry. The only retry in the
//! tool is the user choosing "Generate another" in the review loop.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::completion::prompt::{DEFAULT_SYSTEM_MESSAGE, build_commit_prompt};
use crate::config::Profile;
use crate::error::CompletionError;

/// Default API base. Overridable for tests and alternative providers.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Generation parameters drawn from global configuration.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Anything that can turn a diff and branch name into a commit message.
///
/// The review loop and workflow depend on this trait so tests can supply
/// scripted generators instead of a live endpoint.
#[async_trait]
pub trait MessageGenerator {
    async fn generate(&self, diff: &str, branch_name: &str) -> Result<String, CompletionError>;
}

/// Client bound to one profile's credentials and the global generation
/// parameters.
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    system_message: String,
    params: GenerationParams,
}

impl CompletionClient {
    pub fn new(profile: &Profile, params: GenerationParams) -> Self {
        Self::with_base_url(profile, params, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(profile: &Profile, params: GenerationParams, base_url: &str) -> Self {
        let system_message = if profile.system_message.is_empty() {
            DEFAULT_SYSTEM_MESSAGE.to_string()
        } else {
            profile.system_message.clone()
        };

        CompletionClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: profile.api_key.clone(),
            model: profile.model.clone(),
            system_message,
            params,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl MessageGenerator for CompletionClient {
    async fn generate(&self, diff: &str, branch_name: &str) -> Result<String, CompletionError> {
        let prompt = build_commit_prompt(diff, branch_name);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_message,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("POST {url} (model={}, prompt {} chars)", self.model, prompt.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_millis(self.params.timeout_ms))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.params.timeout_ms)
                } else {
                    CompletionError::RequestFailed(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(CompletionError::InvalidResponse)?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(system_message: &str) -> Profile {
        Profile {
            name: "test".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o-mini".to_string(),
            system_message: system_message.to_string(),
        }
    }

    fn params() -> GenerationParams {
        GenerationParams {
            max_tokens: 150,
            temperature: 0.7,
            timeout_ms: 60_000,
        }
    }

    #[test]
    fn test_empty_profile_system_message_uses_default() {
        let client = CompletionClient::new(&profile(""), params());
        assert_eq!(client.system_message, DEFAULT_SYSTEM_MESSAGE);
    }

    #[test]
    fn test_profile_system_message_overrides_default() {
        let client = CompletionClient::new(&profile("Always reply in haiku."), params());
        assert_eq!(client.system_message, "Always reply in haiku.");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CompletionClient::with_base_url(&profile(""), params(), "http://localhost:1234/");
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage { role: "system", content: "sys" },
                ChatMessage { role: "user", content: "usr" },
            ],
            max_tokens: 150,
            temperature: 0.7,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 150);
    }
}
