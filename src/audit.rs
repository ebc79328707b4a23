//! JSONL audit logging for llm-guard
//!
//! Records every decision to a JSONL file for later analysis. Logging is
//! best-effort: a failed write never changes the verdict.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::{HookResponse, Tier};
use crate::redact::redact_secrets;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (ALLOWED, BLOCKED, ERROR)
    pub level: LogLevel,

    /// Pipeline tier that decided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,

    /// Hard-block rule that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Category sent to the judge (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Summary of the input, secrets redacted
    pub input_summary: String,

    /// Reason for the decision
    pub reason: String,

    /// Exit code returned to the host
    pub exit_code: i32,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from input and response
    pub fn new(input: Option<&HookInput>, response: &HookResponse) -> Self {
        let (level, tier, rule_id, category, reason) = match response {
            HookResponse::Verdict(verdict) => (
                if verdict.is_blocked() {
                    LogLevel::Blocked
                } else {
                    LogLevel::Allowed
                },
                Some(verdict.tier),
                verdict.rule_id.clone(),
                verdict.category.clone(),
                verdict.reason.clone(),
            ),
            HookResponse::Fault { message, .. } => {
                (LogLevel::Error, None, None, None, message.clone())
            }
        };

        Self {
            timestamp: Utc::now(),
            level,
            tier,
            rule_id,
            category,
            input_summary: input.map(|i| redact_secrets(&i.summary())).unwrap_or_default(),
            reason,
            exit_code: response.exit_code(),
            session_id: input.and_then(|i| i.session_id.clone()),
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a hook response
    pub fn log_response(
        &mut self,
        input: Option<&HookInput>,
        response: &HookResponse,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, response);
        self.log(&entry)
    }
}
