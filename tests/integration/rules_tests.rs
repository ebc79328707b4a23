//! Integration tests for catalog versions and user rules

use std::io::Write;
use tempfile::NamedTempFile;

use llm_guard::judge::scripted::ScriptedJudge;
use llm_guard::judge::CREDENTIAL_UNAVAILABLE;
use llm_guard::rules::custom::CustomRules;
use llm_guard::{Catalog, CatalogVersion, Config, Gatekeeper, GuardError, JudgeClient, Tier};

const USER_RULES: &str = r#"
[[hard_block]]
id = "terraform-destroy"
pattern = "terraform\\s+destroy"
reason = "Infrastructure teardown"

[[category]]
name = "kubectl"
pattern = "kubectl\\s+"
instructions = "Validate kubectl commands for read-only operations"
safe_criteria = "get, describe, logs"
unsafe_criteria = "apply, delete, edit, scale"
safe_examples = ["kubectl get pods"]
unsafe_examples = ["kubectl delete ns prod"]
"#;

fn config_with_rules(rules: &str) -> (Config, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", rules).unwrap();

    let mut config = Config::default();
    config.general.audit_log = false;
    config.rules.rules_file = Some(file.path().display().to_string());
    (config, file)
}

#[test]
fn test_strict_blocks_verification_bypass() {
    let strict = Gatekeeper::new(
        Catalog::builtin(CatalogVersion::Strict),
        JudgeClient::unconfigured(),
    )
    .unwrap();
    let verdict = strict.evaluate("git commit --no-verify -m wip");
    assert!(verdict.is_blocked());
    assert_eq!(verdict.tier, Tier::HardBlock);
    assert_eq!(verdict.reason, "Verification bypass flag");

    let standard = Gatekeeper::new(Catalog::default(), JudgeClient::unconfigured()).unwrap();
    assert!(standard.evaluate("git commit --no-verify -m wip").is_allow());
}

#[test]
fn test_strict_judges_bare_rm() {
    let judge = ScriptedJudge::reply("1");
    let strict = Gatekeeper::new(
        Catalog::builtin(CatalogVersion::Strict),
        JudgeClient::new(Box::new(judge.clone())),
    )
    .unwrap();
    let verdict = strict.evaluate("rm notes.txt");
    assert!(verdict.is_allow());
    assert_eq!(verdict.tier, Tier::Judge);
    assert_eq!(judge.calls(), 1);
}

#[test]
fn test_user_rules_from_config() {
    let (config, _file) = config_with_rules(USER_RULES);
    let gatekeeper = Gatekeeper::from_config(&config, None).unwrap();

    let verdict = gatekeeper.evaluate("terraform destroy -auto-approve");
    assert!(verdict.is_blocked());
    assert_eq!(verdict.rule_id.as_deref(), Some("terraform-destroy"));

    let verdict = gatekeeper.evaluate("kubectl get pods");
    assert!(verdict.is_blocked());
    assert_eq!(verdict.category.as_deref(), Some("kubectl"));
    assert_eq!(verdict.reason, CREDENTIAL_UNAVAILABLE);
}

#[test]
fn test_user_category_judged() {
    let mut catalog = Catalog::default();
    catalog.extend(CustomRules::from_toml(USER_RULES).unwrap());
    let gatekeeper =
        Gatekeeper::new(catalog, JudgeClient::new(Box::new(ScriptedJudge::reply("0")))).unwrap();

    let verdict = gatekeeper.evaluate("kubectl delete ns prod");
    assert!(verdict.is_blocked());
    assert_eq!(verdict.reason, "kubectl command rejected by semantic judge");
}

#[test]
fn test_user_rules_come_after_builtins() {
    let rules = r#"
        [[category]]
        name = "gcloud-strict"
        pattern = "gcloud\\s+"
        instructions = "Reject everything"
        safe_criteria = "nothing"
        unsafe_criteria = "everything"
    "#;
    let mut catalog = Catalog::default();
    catalog.extend(CustomRules::from_toml(rules).unwrap());
    let gatekeeper = Gatekeeper::new(catalog, JudgeClient::unconfigured()).unwrap();

    let verdict = gatekeeper.evaluate("gcloud projects list");
    assert_eq!(verdict.category.as_deref(), Some("gcloud"));
}

#[test]
fn test_invalid_user_pattern_is_error() {
    let (config, _file) = config_with_rules(
        r#"
        [[category]]
        name = "broken"
        pattern = "kubectl\\s+("
        instructions = "x"
        safe_criteria = "x"
        unsafe_criteria = "x"
        "#,
    );
    let result = Gatekeeper::from_config(&config, None);
    assert!(matches!(result, Err(GuardError::Rules(_))));
}
