//! Error types for llm-guard
//!
//! Matching and judging never fail from the caller's point of view; these
//! errors only arise while building the engine or reading hook input, and
//! the binary maps every one of them through the configured fault policy.

use std::io;
use thiserror::Error;

use crate::judge::JudgeError;

/// Errors raised while compiling or loading rule tables
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid {table} pattern: {source}")]
    InvalidPattern {
        table: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse rules file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown catalog '{0}' (expected standard or strict)")]
    UnknownCatalog(String),
}

/// Errors raised while decoding hook input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Io(#[from] io::Error),

    #[error("malformed hook input: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level error for the hook binary
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("{0}")]
    Rules(#[from] RuleError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("failed to initialise judge: {0}")]
    Judge(#[from] JudgeError),
}
