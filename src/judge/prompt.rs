//! Judge prompt rendering

use crate::rules::ValidationCategory;

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the category guidance
pub fn category_prompt(category: &ValidationCategory) -> String {
    format!(
        "You are validating a {name} command for safety.

TASK: {instructions}

CRITERIA:
- SAFE: {safe}
- UNSAFE: {unsafe_}

EXAMPLES:

SAFE:
{safe_examples}

UNSAFE:
{unsafe_examples}

Respond with exactly \"1\" if SAFE or \"0\" if UNSAFE. Output nothing else.",
        name = category.name,
        instructions = category.instructions,
        safe = category.safe_criteria,
        unsafe_ = category.unsafe_criteria,
        safe_examples = bullets(&category.safe_examples),
        unsafe_examples = bullets(&category.unsafe_examples),
    )
}

/// Full request text: guidance followed by the literal command
pub fn build_request(category: &ValidationCategory, command: &str) -> String {
    format!(
        "{}\n\nCommand to validate: {}",
        category_prompt(category),
        command
    )
}
