//! User-defined rule extensions
//!
//! A TOML file can add hard blocks and judge categories on top of the
//! built-in catalog. Entries are evaluated after the built-in ones.

use serde::Deserialize;
use std::path::Path;

use crate::error::RuleError;
use crate::rules::{HardBlockRule, ValidationCategory};

/// The rules file structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CustomRules {
    /// Extra hard blocks
    #[serde(default)]
    pub hard_block: Vec<HardBlockRule>,

    /// Extra judge categories
    #[serde(default)]
    pub category: Vec<ValidationCategory>,
}

impl CustomRules {
    /// Load rules from file
    pub fn from_file(path: &Path) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| RuleError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load rules if the file exists; a missing file means no extensions
    pub fn load_optional(path: Option<&Path>) -> Result<Self, RuleError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
