//! Semantic judge client
//!
//! Commands that match a validation category are sent to an external
//! classifier that answers `1` (safe) or `0` (unsafe). The transport sits
//! behind [`JudgeBackend`]; the client owns the fail-closed policy: a missing
//! backend, a transport error, or any reply other than a leading `1` blocks.

pub mod anthropic;
pub mod prompt;
pub mod scripted;

use std::time::Duration;
use thiserror::Error;

use crate::config::JudgeConfig;
use crate::rules::ValidationCategory;
use anthropic::AnthropicJudge;

/// Trimmed replies longer than this are cut before interpretation
pub const MAX_REPLY_CHARS: usize = 8;

/// Reason used when no credential is configured
pub const CREDENTIAL_UNAVAILABLE: &str = "judge credential unavailable - blocking for safety";

/// Errors that can occur while consulting the judge
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("judge unavailable: {0}")]
    Unavailable(String),
}

/// A single judgment request
#[derive(Debug, Clone)]
pub struct JudgeRequest {
    /// Category the command was detected as
    pub category: String,

    /// Full prompt, command included
    pub prompt: String,
}

/// Transport to the external classifier
pub trait JudgeBackend {
    /// Send one request and return the raw reply text
    fn send(&self, request: &JudgeRequest) -> Result<String, JudgeError>;
}

/// Binary verdict from the judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub safe: bool,
    pub reason: String,
}

impl Judgment {
    fn safe() -> Self {
        Self {
            safe: true,
            reason: String::new(),
        }
    }

    fn unsafe_because(reason: impl Into<String>) -> Self {
        Self {
            safe: false,
            reason: reason.into(),
        }
    }
}

/// Interpret a raw reply: safe only when it starts with `1` after trimming
pub fn interpret_reply(reply: &str) -> bool {
    let bounded: String = reply.trim().chars().take(MAX_REPLY_CHARS).collect();
    bounded.starts_with('1')
}

/// Fail-closed wrapper around a judge backend
pub struct JudgeClient {
    backend: Option<Box<dyn JudgeBackend>>,
}

impl JudgeClient {
    /// Client bound to a backend
    pub fn new(backend: Box<dyn JudgeBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Client with no credential; every judgment is unsafe
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// Production client. `api_key` is `None` when no credential is set.
    pub fn from_config(config: &JudgeConfig, api_key: Option<String>) -> Result<Self, JudgeError> {
        match api_key.filter(|key| !key.trim().is_empty()) {
            Some(key) => Ok(Self::new(Box::new(AnthropicJudge::new(config, key)?))),
            None => Ok(Self::unconfigured()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Ask the judge whether `command` is safe within `category`
    pub fn judge(&self, command: &str, category: &ValidationCategory) -> Judgment {
        let Some(backend) = self.backend.as_ref() else {
            return Judgment::unsafe_because(CREDENTIAL_UNAVAILABLE);
        };

        let request = JudgeRequest {
            category: category.name.clone(),
            prompt: prompt::build_request(category, command),
        };

        match backend.send(&request) {
            Ok(reply) if interpret_reply(&reply) => Judgment::safe(),
            Ok(_) => Judgment::unsafe_because(format!(
                "{} command rejected by semantic judge",
                category.name
            )),
            Err(e) => Judgment::unsafe_because(format!("judge invocation failed: {}", e)),
        }
    }
}
