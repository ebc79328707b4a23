//! Self-install into the per-user hook directory

use std::io;
use std::path::{Path, PathBuf};

/// File name of the installed hook
pub const HOOK_FILE_NAME: &str = "llm-guard";

/// `~/.claude/hooks`
pub fn default_hooks_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".claude").join("hooks"))
}

/// Copy `source` into `hooks_dir` as an executable hook
pub fn install_to(source: &Path, hooks_dir: &Path) -> io::Result<PathBuf> {
    std::fs::create_dir_all(hooks_dir)?;

    let hook_path = hooks_dir.join(HOOK_FILE_NAME);
    std::fs::copy(source, &hook_path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&hook_path, std::fs::Permissions::from_mode(0o755))?;
    }

    Ok(hook_path)
}

/// Settings snippet registering the hook for Bash tool calls
pub fn settings_snippet(hook_path: &Path) -> String {
    let snippet = serde_json::json!({
        "hooks": {
            "PreToolUse": [{
                "matcher": "Bash",
                "hooks": [{
                    "type": "command",
                    "command": hook_path.display().to_string(),
                }]
            }]
        }
    });
    serde_json::to_string_pretty(&snippet).unwrap_or_default()
}
