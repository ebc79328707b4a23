//! Verdicts and hook responses
//!
//! The hook host reads the exit code and, on block, a single stderr line.
//! Nothing is written to stdout.

use serde::Serialize;

use crate::config::FaultPolicy;

/// Exit code for allowed or pass-through commands
pub const EXIT_ALLOW: i32 = 0;

/// Exit code the hook host treats as a block
pub const EXIT_BLOCK: i32 = 2;

/// Final decision for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Blocked,
}

/// Pipeline tier that produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Empty command, nothing to validate
    PassThrough,
    HardBlock,
    /// No rule or category matched
    DefaultAllow,
    Judge,
}

/// Result of evaluating one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub reason: String,
    pub tier: Tier,

    /// Hard-block rule that fired
    pub rule_id: Option<String>,

    /// Category sent to the judge
    pub category: Option<String>,
}

impl Verdict {
    /// Create an allow verdict
    pub fn allow(tier: Tier) -> Self {
        Self {
            decision: Decision::Allowed,
            reason: String::new(),
            tier,
            rule_id: None,
            category: None,
        }
    }

    /// Create a hard-block verdict
    pub fn hard_block(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Blocked,
            reason: reason.into(),
            tier: Tier::HardBlock,
            rule_id: Some(rule_id.into()),
            category: None,
        }
    }

    /// Create a verdict from a judge answer
    pub fn judged(category: impl Into<String>, safe: bool, reason: impl Into<String>) -> Self {
        let (decision, reason) = if safe {
            (Decision::Allowed, String::new())
        } else {
            (Decision::Blocked, reason.into())
        };
        Self {
            decision,
            reason,
            tier: Tier::Judge,
            rule_id: None,
            category: Some(category.into()),
        }
    }

    pub fn is_allow(&self) -> bool {
        self.decision == Decision::Allowed
    }

    pub fn is_blocked(&self) -> bool {
        self.decision == Decision::Blocked
    }
}

/// What the hook process reports back to its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResponse {
    /// The pipeline reached a verdict
    Verdict(Verdict),

    /// The hook failed before reaching a verdict
    Fault { message: String, policy: FaultPolicy },
}

impl HookResponse {
    pub fn fault(message: impl Into<String>, policy: FaultPolicy) -> Self {
        HookResponse::Fault {
            message: message.into(),
            policy,
        }
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            HookResponse::Verdict(v) if v.is_blocked() => EXIT_BLOCK,
            HookResponse::Verdict(_) => EXIT_ALLOW,
            HookResponse::Fault {
                policy: FaultPolicy::Block,
                ..
            } => EXIT_BLOCK,
            HookResponse::Fault {
                policy: FaultPolicy::Allow,
                ..
            } => EXIT_ALLOW,
        }
    }

    /// Line for stderr, if any. Always a single line.
    pub fn stderr_line(&self) -> Option<String> {
        match self {
            HookResponse::Verdict(v) if v.is_blocked() => {
                Some(format!("BLOCKED: {}", single_line(&v.reason)))
            }
            HookResponse::Verdict(_) => None,
            HookResponse::Fault { message, .. } => {
                Some(format!("Validation error: {}", single_line(message)))
            }
        }
    }
}

/// Collapse runs of whitespace, newlines included, into single spaces
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
