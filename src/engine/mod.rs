//! Decision pipeline for llm-guard
//!
//! Three tiers, terminal on the first block: hard blocks, then category
//! detection with escalation to the semantic judge, then default-allow.

pub mod matcher;

use crate::config::Config;
use crate::error::{GuardError, InputError, RuleError};
use crate::input::HookInput;
use crate::judge::JudgeClient;
use crate::output::{Tier, Verdict};
use crate::rules::custom::CustomRules;
use crate::rules::Catalog;
use matcher::PatternMatcher;

/// The gatekeeper: compiled catalog plus judge client
pub struct Gatekeeper {
    matcher: PatternMatcher,
    judge: JudgeClient,
}

impl Gatekeeper {
    /// Create a gatekeeper from a catalog and a judge client
    pub fn new(catalog: Catalog, judge: JudgeClient) -> Result<Self, RuleError> {
        Ok(Self {
            matcher: PatternMatcher::new(catalog)?,
            judge,
        })
    }

    /// Build the production gatekeeper.
    ///
    /// `api_key` is the judge credential resolved by the caller; `None`
    /// makes every categorised command block.
    pub fn from_config(config: &Config, api_key: Option<String>) -> Result<Self, GuardError> {
        let mut catalog = Catalog::builtin(config.general.catalog);
        let rules_path = config.rules_path();
        catalog.extend(CustomRules::load_optional(rules_path.as_deref())?);

        let judge = JudgeClient::from_config(&config.judge, api_key)?;
        Ok(Self::new(catalog, judge)?)
    }

    /// Evaluate one command
    pub fn evaluate(&self, command: &str) -> Verdict {
        if command.is_empty() {
            return Verdict::allow(Tier::PassThrough);
        }

        if let Some(rule) = self.matcher.match_hard_block(command) {
            return Verdict::hard_block(&*rule.id, &*rule.reason);
        }

        let Some(category) = self.matcher.detect_category(command) else {
            return Verdict::allow(Tier::DefaultAllow);
        };

        let judgment = self.judge.judge(command, category);
        Verdict::judged(category.name.as_str(), judgment.safe, judgment.reason)
    }

    /// Evaluate a parsed hook input
    pub fn check(&self, input: &HookInput) -> Verdict {
        self.evaluate(input.command())
    }

    /// Parse raw hook JSON and evaluate it
    pub fn check_json(&self, raw: &str) -> Result<(HookInput, Verdict), InputError> {
        let input = HookInput::from_json(raw)?;
        let verdict = self.check(&input);
        Ok((input, verdict))
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    pub fn judge_configured(&self) -> bool {
        self.judge.is_configured()
    }
}
