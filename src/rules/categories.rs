//! Validation categories escalated to the semantic judge
//!
//! Each category carries criteria and worked examples that are rendered into
//! the judge prompt.

use once_cell::sync::Lazy;

use crate::config::CatalogVersion;
use crate::rules::ValidationCategory;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rm_category(pattern: &str) -> ValidationCategory {
    ValidationCategory {
        name: "rm".to_string(),
        pattern: pattern.to_string(),
        instructions: "Validate rm commands for path safety".to_string(),
        safe_criteria:
            "Paths within worktrees, build directories, temp folders, or clearly safe local paths"
                .to_string(),
        unsafe_criteria:
            "System paths, parent directory traversal (../), root paths, or home directory shortcuts"
                .to_string(),
        safe_examples: strings(&[
            "rm -rf build/",
            "rm -rf ./temp",
            "rm -rf /Users/user/worktrees/project/dist",
            "rm -rf node_modules",
        ]),
        unsafe_examples: strings(&["rm -rf ../../../", "rm -rf /usr", "rm -rf /etc", "rm -rf ~"]),
    }
}

fn gcloud_category() -> ValidationCategory {
    ValidationCategory {
        name: "gcloud".to_string(),
        pattern: r"gcloud\s+".to_string(),
        instructions: "Validate gcloud commands for read-only operations".to_string(),
        safe_criteria:
            "Read-only operations (list, get, describe, show, info, auth list, config get-value)"
                .to_string(),
        unsafe_criteria: "Write operations (create, delete, update, deploy, set, add, remove)"
            .to_string(),
        safe_examples: strings(&[
            "gcloud projects list",
            "gcloud config get-value project",
            "gcloud compute instances list",
            "gcloud auth list",
        ]),
        unsafe_examples: strings(&[
            "gcloud compute instances create",
            "gcloud projects delete",
            "gcloud iam policy-bindings add",
            "gcloud container clusters create",
        ]),
    }
}

/// Standard catalog: only recursive force deletes go to the judge
pub static STANDARD_CATEGORIES: Lazy<Vec<ValidationCategory>> =
    Lazy::new(|| vec![rm_category(r"rm\s+.*-rf"), gcloud_category()]);

/// Strict catalog: every `rm` invocation goes to the judge
pub static STRICT_CATEGORIES: Lazy<Vec<ValidationCategory>> =
    Lazy::new(|| vec![rm_category(r"\brm\s+"), gcloud_category()]);

/// Get the category table for a catalog version, in evaluation order
pub fn categories_for_version(version: CatalogVersion) -> Vec<ValidationCategory> {
    match version {
        CatalogVersion::Standard => STANDARD_CATEGORIES.to_vec(),
        CatalogVersion::Strict => STRICT_CATEGORIES.to_vec(),
    }
}
