//! Secret redaction for logged command text
//!
//! Commands sent through the hook may carry credentials inline; these are
//! masked before anything reaches the audit log.

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns for credentials that commonly appear in shell commands
pub static SECRET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // API keys and tokens
        r"(?i)api[_-]?key\s*[=:]\s*['\x22]?[a-zA-Z0-9_\-]{16,}",
        r"(?i)secret[_-]?key\s*[=:]\s*['\x22]?[a-zA-Z0-9_\-]{16,}",
        r"(?i)access[_-]?token\s*[=:]\s*['\x22]?[a-zA-Z0-9_\-]{16,}",
        // Anthropic keys
        r"sk-ant-[A-Za-z0-9_\-]{20,}",
        // AWS access key
        r"AKIA[0-9A-Z]{16}",
        // GitHub tokens
        r"gh[pousr]_[A-Za-z0-9_]{36,}",
        r"github_pat_[A-Za-z0-9_]{22,}",
        // Passwords passed as quoted assignments
        r"(?i)(password|passwd|pwd)\s*[=:]\s*['\x22][^'\x22]+['\x22]",
        // Bearer headers
        r"(?i)bearer\s+[A-Za-z0-9._\-]{16,}",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// Redact secrets in text for logging
pub fn redact_secrets(text: &str) -> String {
    let mut redacted = text.to_string();

    for pattern in SECRET_PATTERNS.iter() {
        redacted = pattern.replace_all(&redacted, "[REDACTED]").into_owned();
    }

    redacted
}
