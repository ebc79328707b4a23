//! Pattern matching against the rule catalog
//!
//! Both tables are compiled into a case-insensitive `RegexSet`. Set indices
//! follow catalog order, so the lowest matching index is the first rule in
//! definition order.

use regex::{RegexSet, RegexSetBuilder};

use crate::error::RuleError;
use crate::rules::{Catalog, HardBlockRule, ValidationCategory};

/// Compiled catalog
pub struct PatternMatcher {
    catalog: Catalog,
    hard_block_set: RegexSet,
    category_set: RegexSet,
}

fn compile<'a, I>(table: &'static str, patterns: I) -> Result<RegexSet, RuleError>
where
    I: IntoIterator<Item = &'a str>,
{
    RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()
        .map_err(|source| RuleError::InvalidPattern { table, source })
}

impl PatternMatcher {
    /// Compile a catalog
    pub fn new(catalog: Catalog) -> Result<Self, RuleError> {
        let hard_block_set = compile(
            "hard-block",
            catalog.hard_blocks.iter().map(|r| &*r.pattern),
        )?;
        let category_set = compile(
            "category",
            catalog.categories.iter().map(|c| c.pattern.as_str()),
        )?;

        Ok(Self {
            catalog,
            hard_block_set,
            category_set,
        })
    }

    /// First hard-block rule matching anywhere in the command
    pub fn match_hard_block(&self, command: &str) -> Option<&HardBlockRule> {
        self.hard_block_set
            .matches(command)
            .iter()
            .next()
            .map(|idx| &self.catalog.hard_blocks[idx])
    }

    /// First category whose detection pattern fires
    pub fn detect_category(&self, command: &str) -> Option<&ValidationCategory> {
        self.category_set
            .matches(command)
            .iter()
            .next()
            .map(|idx| &self.catalog.categories[idx])
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
