//! Input parsing for the hook JSON format
//!
//! Parses the JSON object the host sends on stdin. Only
//! `tool_input.command` drives the decision; the rest is kept for the audit log.

use serde::Deserialize;

use crate::error::InputError;

/// Main input structure from the hook host
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash")
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool-specific input parameters
    #[serde(default)]
    pub tool_input: Option<ToolInput>,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

/// Tool input; a missing command means there is nothing to validate
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: Option<String>,
}

impl HookInput {
    /// Parse input from JSON string. Blank input is an empty command.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Build an input for a bare command
    pub fn for_command(command: impl Into<String>) -> Self {
        Self {
            tool_name: Some("Bash".to_string()),
            tool_input: Some(ToolInput {
                command: Some(command.into()),
            }),
            ..Self::default()
        }
    }

    /// The command to evaluate (empty when absent)
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|t| t.command.as_deref())
            .unwrap_or("")
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        let command = self.command();
        let truncated = if command.chars().count() > 100 {
            format!("{}...", command.chars().take(100).collect::<String>())
        } else {
            command.to_string()
        };
        format!("{}: {}", self.tool_name.as_deref().unwrap_or("Bash"), truncated)
    }
}
