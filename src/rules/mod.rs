//! Rule catalog for llm-guard
//!
//! Hard blocks are decided by pattern alone. Validation categories mark
//! commands whose safety depends on their arguments; those go to the judge.
//! Both tables are ordered and the first match wins.

pub mod categories;
pub mod custom;
pub mod hard_block;

use serde::Deserialize;
use std::borrow::Cow;

use crate::config::CatalogVersion;
use custom::CustomRules;

/// A command pattern that is always rejected
#[derive(Debug, Clone, Deserialize)]
pub struct HardBlockRule {
    /// Unique identifier for this rule
    pub id: Cow<'static, str>,

    /// Regex pattern to match (case-insensitive)
    pub pattern: Cow<'static, str>,

    /// Human-readable reason for blocking
    pub reason: Cow<'static, str>,
}

impl HardBlockRule {
    /// Create a built-in rule
    pub const fn new(id: &'static str, pattern: &'static str, reason: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            pattern: Cow::Borrowed(pattern),
            reason: Cow::Borrowed(reason),
        }
    }
}

/// A command family whose safety is decided by the semantic judge
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationCategory {
    /// Identifier shown in reasons and the audit log
    pub name: String,

    /// Detection regex (case-insensitive)
    pub pattern: String,

    /// What the judge is asked to check
    pub instructions: String,

    pub safe_criteria: String,
    pub unsafe_criteria: String,

    #[serde(default)]
    pub safe_examples: Vec<String>,

    #[serde(default)]
    pub unsafe_examples: Vec<String>,
}

/// The ordered rule tables used by one engine
#[derive(Debug, Clone)]
pub struct Catalog {
    pub version: CatalogVersion,
    pub hard_blocks: Vec<HardBlockRule>,
    pub categories: Vec<ValidationCategory>,
}

impl Catalog {
    /// Built-in tables for a catalog version
    pub fn builtin(version: CatalogVersion) -> Self {
        Self {
            version,
            hard_blocks: hard_block::rules_for_version(version),
            categories: categories::categories_for_version(version),
        }
    }

    /// Append user rules after the built-in tables
    pub fn extend(&mut self, custom: CustomRules) {
        self.hard_blocks.extend(custom.hard_block);
        self.categories.extend(custom.category);
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&ValidationCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin(CatalogVersion::default())
    }
}
