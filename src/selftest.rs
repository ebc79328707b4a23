//! Offline self-test
//!
//! Exercises the built-in catalog and the fail-closed judge path with a
//! scripted backend, so it runs without a credential or network access.

use crate::config::CatalogVersion;
use crate::engine::Gatekeeper;
use crate::judge::scripted::ScriptedJudge;
use crate::judge::{JudgeClient, CREDENTIAL_UNAVAILABLE};
use crate::rules::Catalog;

/// Outcome of one self-test check
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
}

fn gatekeeper(version: CatalogVersion, judge: JudgeClient) -> Option<Gatekeeper> {
    Gatekeeper::new(Catalog::builtin(version), judge).ok()
}

fn check(name: &'static str, passed: bool) -> CheckResult {
    CheckResult { name, passed }
}

/// Run every check against the given catalog version
pub fn run(version: CatalogVersion) -> Vec<CheckResult> {
    let Some(offline) = gatekeeper(version, JudgeClient::unconfigured()) else {
        return vec![check("built-in catalog compiles", false)];
    };
    let matcher = offline.matcher();

    let mut results = vec![
        check("built-in catalog compiles", true),
        check(
            "hard block: sudo rm",
            matcher.match_hard_block("sudo rm -rf /").is_some(),
        ),
        check(
            "hard block: chmod 777 wins over /etc/",
            matcher
                .match_hard_block("chmod 777 /etc/passwd")
                .is_some_and(|r| r.id == "chmod-777"),
        ),
        check(
            "no hard block: rm -rf build/",
            matcher.match_hard_block("rm -rf build/").is_none(),
        ),
        check(
            "category: rm",
            matcher
                .detect_category("rm -rf temp/")
                .is_some_and(|c| c.name == "rm"),
        ),
        check(
            "category: gcloud",
            matcher
                .detect_category("gcloud projects list")
                .is_some_and(|c| c.name == "gcloud"),
        ),
        check(
            "no category: ls -la",
            matcher.detect_category("ls -la").is_none(),
        ),
        check(
            "default allow: git status",
            offline.evaluate("git status").is_allow(),
        ),
        check("missing credential blocks", {
            let verdict = offline.evaluate("rm -rf build/");
            verdict.is_blocked() && verdict.reason == CREDENTIAL_UNAVAILABLE
        }),
    ];

    let failing = gatekeeper(
        version,
        JudgeClient::new(Box::new(ScriptedJudge::fail("self-test transport failure"))),
    );
    results.push(check(
        "judge error blocks",
        failing.is_some_and(|g| g.evaluate("gcloud projects list").is_blocked()),
    ));

    let garbled = gatekeeper(version, JudgeClient::new(Box::new(ScriptedJudge::reply("maybe"))));
    results.push(check(
        "garbled reply blocks",
        garbled.is_some_and(|g| g.evaluate("gcloud projects list").is_blocked()),
    ));

    results
}
