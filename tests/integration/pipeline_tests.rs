//! Integration tests for the three-tier decision pipeline

use llm_guard::judge::scripted::ScriptedJudge;
use llm_guard::judge::CREDENTIAL_UNAVAILABLE;
use llm_guard::{Catalog, Gatekeeper, HookInput, JudgeClient, Tier, Verdict};

fn offline() -> Gatekeeper {
    Gatekeeper::new(Catalog::default(), JudgeClient::unconfigured()).unwrap()
}

fn with_reply(reply: &str) -> (Gatekeeper, ScriptedJudge) {
    let judge = ScriptedJudge::reply(reply);
    let gatekeeper =
        Gatekeeper::new(Catalog::default(), JudgeClient::new(Box::new(judge.clone()))).unwrap();
    (gatekeeper, judge)
}

fn check_json(gatekeeper: &Gatekeeper, command: &str) -> Verdict {
    let json = format!(
        r#"{{"tool_name":"Bash","tool_input":{{"command":"{}"}}}}"#,
        command.replace('\\', "\\\\").replace('"', "\\\"")
    );
    let input = HookInput::from_json(&json).unwrap();
    gatekeeper.check(&input)
}

// ============================================================================
// Tier 1 - Hard blocks
// ============================================================================

#[test]
fn test_hard_blocks() {
    let gatekeeper = offline();
    for cmd in [
        "sudo rm -rf /",
        "chmod 777 /etc/passwd",
        "dd if=/dev/zero of=/dev/sda",
        "mkfs.ext4 /dev/sda1",
        "fdisk /dev/sda",
        "rm -rf /",
        "rm -rf ~",
        "timeout 30 rm -rf /",
        "cat /etc/shadow",
        "cp evil /usr/bin/ls",
        "ls /System/Library",
    ] {
        let verdict = check_json(&gatekeeper, cmd);
        assert!(verdict.is_blocked(), "Command should be hard blocked: {}", cmd);
        assert_eq!(verdict.tier, Tier::HardBlock, "{}", cmd);
        assert!(!verdict.reason.is_empty(), "{}", cmd);
    }
}

#[test]
fn test_sudo_rm_reason() {
    let verdict = offline().evaluate("sudo rm -rf /");
    assert_eq!(verdict.reason, "Privileged destructive command");
}

#[test]
fn test_chmod_777_takes_precedence_over_etc() {
    let verdict = offline().evaluate("chmod 777 /etc/passwd");
    assert_eq!(verdict.reason, "Dangerous permission change");
    assert_eq!(verdict.rule_id.as_deref(), Some("chmod-777"));
}

#[test]
fn test_hard_block_ignores_safe_judge() {
    let (gatekeeper, judge) = with_reply("1");
    for cmd in ["sudo rm -rf /", "rm -rf ~/projects", "gcloud compute scp /etc/hosts vm:"] {
        assert!(gatekeeper.evaluate(cmd).is_blocked(), "{}", cmd);
    }
    assert_eq!(judge.calls(), 0);
}

// ============================================================================
// Tier 2 - Judge categories
// ============================================================================

#[test]
fn test_category_without_credential_blocks() {
    let gatekeeper = offline();
    for cmd in ["rm -rf build/", "rm -rf node_modules", "gcloud projects list"] {
        let verdict = check_json(&gatekeeper, cmd);
        assert!(verdict.is_blocked(), "{}", cmd);
        assert_eq!(verdict.reason, CREDENTIAL_UNAVAILABLE);
    }
}

#[test]
fn test_gcloud_read_only_allowed_by_judge() {
    let (gatekeeper, judge) = with_reply("1");
    let verdict = gatekeeper.evaluate("gcloud projects list");
    assert!(verdict.is_allow());
    assert_eq!(verdict.tier, Tier::Judge);
    assert_eq!(verdict.category.as_deref(), Some("gcloud"));
    assert_eq!(judge.calls(), 1);
}

#[test]
fn test_gcloud_write_blocked_by_judge() {
    let (gatekeeper, _) = with_reply("0");
    let verdict = gatekeeper.evaluate("gcloud compute instances create x");
    assert!(verdict.is_blocked());
    assert_eq!(verdict.reason, "gcloud command rejected by semantic judge");
}

#[test]
fn test_reply_interpretation() {
    for (reply, allowed) in [
        ("1", true),
        ("1\n", true),
        ("  1  ", true),
        ("0", false),
        ("", false),
        ("I think this is safe", false),
    ] {
        let (gatekeeper, _) = with_reply(reply);
        assert_eq!(
            gatekeeper.evaluate("rm -rf ./temp").is_allow(),
            allowed,
            "reply {:?}",
            reply
        );
    }
}

#[test]
fn test_judge_failure_blocks() {
    let judge = ScriptedJudge::fail("401 unauthorized");
    let gatekeeper =
        Gatekeeper::new(Catalog::default(), JudgeClient::new(Box::new(judge))).unwrap();
    let verdict = gatekeeper.evaluate("rm -rf build/");
    assert!(verdict.is_blocked());
    assert!(verdict.reason.starts_with("judge invocation failed:"));
    assert!(verdict.reason.contains("401 unauthorized"));
}

#[test]
fn test_first_category_is_judged() {
    let (gatekeeper, judge) = with_reply("1");
    gatekeeper.evaluate("gcloud storage cp gs://b/x . && rm -rf tmp");
    assert_eq!(judge.last_request().unwrap().category, "rm");
}

// ============================================================================
// Tier 3 - Default allow
// ============================================================================

#[test]
fn test_default_allow() {
    let (gatekeeper, judge) = with_reply("0");
    for cmd in ["git status", "ls -la", "npm install", "cargo build --release", "rm notes.txt"] {
        let verdict = check_json(&gatekeeper, cmd);
        assert!(verdict.is_allow(), "Command should be allowed: {}", cmd);
        assert_eq!(verdict.tier, Tier::DefaultAllow);
        assert!(verdict.reason.is_empty());
    }
    assert_eq!(judge.calls(), 0);
}

#[test]
fn test_empty_command_passes_through() {
    let gatekeeper = offline();
    assert_eq!(gatekeeper.evaluate("").tier, Tier::PassThrough);
    let input = HookInput::from_json(r#"{"tool_input":{}}"#).unwrap();
    assert!(gatekeeper.check(&input).is_allow());
}

#[test]
fn test_evaluation_is_idempotent() {
    let (gatekeeper, _) = with_reply("0");
    for cmd in ["sudo rm -rf /", "gcloud projects delete p", "git status", ""] {
        assert_eq!(gatekeeper.evaluate(cmd), gatekeeper.evaluate(cmd), "{}", cmd);
    }
}
