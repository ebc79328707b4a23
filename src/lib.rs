//! llm-guard - Pre-execution gatekeeper for agent shell commands
//!
//! Decides ALLOW / BLOCK for a shell command before it runs, in three tiers:
//!
//! - **Hard blocks**: patterns that are always rejected
//! - **Judge categories**: command families whose safety depends on their
//!   arguments, escalated to an LLM judge that answers `1` or `0`
//! - **Default allow**: anything matching neither tier
//!
//! Every uncertain outcome (no credential, transport failure, unreadable
//! reply) blocks.
//!
//! # Example
//!
//! ```
//! use llm_guard::{Catalog, Gatekeeper, JudgeClient};
//!
//! let gatekeeper = Gatekeeper::new(Catalog::default(), JudgeClient::unconfigured()).unwrap();
//!
//! assert!(gatekeeper.evaluate("sudo rm -rf /").is_blocked());
//! assert!(gatekeeper.evaluate("git status").is_allow());
//! // No credential: categorised commands fail closed
//! assert!(gatekeeper.evaluate("rm -rf build/").is_blocked());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod install;
pub mod judge;
pub mod output;
pub mod redact;
pub mod rules;
pub mod selftest;

// Re-exports for convenience
pub use config::{CatalogVersion, Config, FaultPolicy};
pub use engine::Gatekeeper;
pub use error::GuardError;
pub use input::HookInput;
pub use judge::{JudgeBackend, JudgeClient};
pub use output::{Decision, HookResponse, Tier, Verdict};
pub use rules::Catalog;
