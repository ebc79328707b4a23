//! Configuration loading for llm-guard
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Which built-in rule tables are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVersion {
    /// Hard blocks for catastrophic operations, `rm -rf` and `gcloud` categories
    #[default]
    Standard,

    /// Standard plus verification-bypass blocking and a broader `rm` category
    Strict,
}

impl CatalogVersion {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(CatalogVersion::Standard),
            "strict" => Some(CatalogVersion::Strict),
            _ => None,
        }
    }
}

/// What to do when the hook itself fails before reaching a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Treat the fault as a block (exit 2)
    #[default]
    Block,

    /// Let the command through (exit 0)
    Allow,
}

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Built-in catalog version
    pub catalog: CatalogVersion,

    /// Policy applied to internal faults
    pub on_internal_error: FaultPolicy,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogVersion::Standard,
            on_internal_error: FaultPolicy::Block,
            audit_log: true,
            audit_path: Some("~/.claude/llm-guard/audit.jsonl".to_string()),
        }
    }
}

/// Semantic judge configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Model identifier sent to the Messages API
    pub model: String,

    /// Messages API endpoint
    pub endpoint: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Upper bound on reply tokens
    pub max_tokens: u32,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            timeout_ms: 10_000,
            max_tokens: 4,
        }
    }
}

impl JudgeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Look up the credential in the environment.
    ///
    /// Only the binary calls this; the library takes the key as a value.
    pub fn api_key_from_env(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// User rule extension section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Path to a TOML file with extra hard blocks and categories
    pub rules_file: Option<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rules_file: Some("~/.claude/llm-guard/rules.toml".to_string()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub judge: JudgeConfig,
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/llm-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/llm-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Config::default())
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }

    /// Get the user rules file path (expanded)
    pub fn rules_path(&self) -> Option<PathBuf> {
        self.rules.rules_file.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
catalog = "standard"
on_internal_error = "block"
audit_log = true
audit_path = "~/.claude/llm-guard/audit.jsonl"

[judge]
api_key_env = "ANTHROPIC_API_KEY"
model = "claude-sonnet-4-20250514"
endpoint = "https://api.anthropic.com/v1/messages"
timeout_ms = 10000
max_tokens = 4

[rules]
rules_file = "~/.claude/llm-guard/rules.toml"
"#;
