//! Anthropic Messages API judge backend

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::JudgeConfig;
use crate::judge::{JudgeBackend, JudgeError, JudgeRequest};
use crate::output::single_line;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Error bodies are cut to this many characters
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Flatten and truncate a non-2xx response body for the error message
fn error_body(body: &str) -> String {
    single_line(body).chars().take(MAX_ERROR_BODY).collect()
}

/// Pull the first text block out of a Messages API response body
fn extract_text(body: &str) -> Result<String, JudgeError> {
    let response: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| JudgeError::InvalidResponse(e.to_string()))?;

    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| JudgeError::InvalidResponse("no text content in response".to_string()))
}

/// Blocking Messages API client with a bounded timeout
pub struct AnthropicJudge {
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
    timeout: Duration,
    http_client: Client,
}

impl AnthropicJudge {
    pub fn new(config: &JudgeConfig, api_key: String) -> Result<Self, JudgeError> {
        let timeout = config.timeout();
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            max_tokens: config.max_tokens,
            timeout,
            http_client,
        })
    }

    fn classify_error(&self, error: reqwest::Error) -> JudgeError {
        if error.is_timeout() {
            JudgeError::Timeout(self.timeout)
        } else {
            JudgeError::Transport(error)
        }
    }
}

impl JudgeBackend for AnthropicJudge {
    fn send(&self, request: &JudgeRequest) -> Result<String, JudgeError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        let text = response.text().map_err(|e| self.classify_error(e))?;

        if !status.is_success() {
            return Err(JudgeError::Api {
                status: status.as_u16(),
                body: error_body(&text),
            });
        }

        extract_text(&text)
    }
}
