//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Each call is a single POST with no retry and no explicit timeout;
//! callers decide what to do when it fails.

use crate::config::AssistantConfig;
use crate::domain::ports::RemoteService;
use crate::utils::error::{ConfigError, RemoteCallError};
use crate::utils::validation::validate_api_key;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// JSON path of the answer text inside a successful reply.
const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        }
    }
}

pub struct GeminiClient {
    config: AssistantConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn request_url(&self, api_key: &str) -> Result<Url, ConfigError> {
        let base = self.config.request_url();
        Url::parse_with_params(&base, &[("key", api_key)]).map_err(|e| ConfigError::InvalidValue {
            field: "gemini.endpoint".to_string(),
            value: base.clone(),
            reason: format!("Invalid URL format: {}", e),
        })
    }
}

#[async_trait]
impl RemoteService for GeminiClient {
    async fn call(&self, prompt: &str) -> Result<String, RemoteCallError> {
        let api_key = validate_api_key(self.config.api_key.as_deref())?;
        let url = self.request_url(api_key)?;

        tracing::debug!("Calling model {}", self.config.model);
        let response = self
            .client
            .post(url)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Remote response status: {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            return Err(RemoteCallError::Status {
                status: status.as_u16(),
                message,
            });
        }

        extract_text(&body)
    }
}

/// `error.message` from an error reply, if the body carries one.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn extract_text(body: &str) -> Result<String, RemoteCallError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RemoteCallError::MalformedEnvelope(format!("reply is not JSON: {}", e)))?;

    value
        .pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            RemoteCallError::MalformedEnvelope("missing candidates[0].content.parts[0].text".to_string())
        })
}
