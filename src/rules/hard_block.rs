//! Hard-block rules for Bash commands
//!
//! No amount of context makes these safe, so they never reach the judge.

use crate::config::CatalogVersion;
use crate::rules::HardBlockRule;

/// Rules active in every catalog version
pub const STANDARD_RULES: &[HardBlockRule] = &[
    HardBlockRule::new("sudo-rm", r"sudo\s+rm", "Privileged destructive command"),
    HardBlockRule::new("chmod-777", r"chmod\s+777", "Dangerous permission change"),
    HardBlockRule::new("rm-root", r"rm\s+.*-rf.*\s+/\s*$", "Root directory deletion"),
    HardBlockRule::new("rm-home", r"rm\s+.*-rf.*\s+~", "Home directory deletion"),
    HardBlockRule::new("dd-disk", r"dd\s+if=", "Dangerous disk operation"),
    HardBlockRule::new("mkfs", r"mkfs\.", "File system operation"),
    HardBlockRule::new("fdisk", r"fdisk", "Disk partitioning operation"),
    // Fixed system locations
    HardBlockRule::new("etc-access", r"/etc/", "System directory access"),
    HardBlockRule::new("usr-bin-access", r"/usr/bin/", "System binary access"),
    HardBlockRule::new("system-access", r"/System/", "System directory access"),
];

/// Extra rules in the strict catalog
pub const STRICT_RULES: &[HardBlockRule] = &[HardBlockRule::new(
    "no-verify",
    r"--no-verify\b",
    "Verification bypass flag",
)];

/// Get the hard-block table for a catalog version, in evaluation order
pub fn rules_for_version(version: CatalogVersion) -> Vec<HardBlockRule> {
    let mut rules = STANDARD_RULES.to_vec();

    if version == CatalogVersion::Strict {
        rules.extend(STRICT_RULES.iter().cloned());
    }

    rules
}
