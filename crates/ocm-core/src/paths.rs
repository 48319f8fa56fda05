use crate::error::{OcmError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SKILL_FILE: &str = ".opencode/skill/context-update/SKILL.md";
pub const COMMAND_FILE: &str = ".opencode/command/context-update.md";

pub const CONFIG_FILE: &str = "opencode.json";

/// Global install root, relative to the user's home directory.
pub const GLOBAL_CONFIG_DIR: &str = ".config/opencode";

/// Entry registered in `instructions`. The `/context-update` command writes here.
pub const CONTEXT_INSTRUCTION_PATH: &str = ".opencode/context/repo-structure.md";

pub const SCHEMA_URL: &str = "https://opencode.ai/config.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(target: &Path) -> PathBuf {
    target.join(CONFIG_FILE)
}

/// `~/.config/opencode`. Fails rather than guessing when no home directory
/// can be determined.
pub fn global_target_dir() -> Result<PathBuf> {
    let home = home::home_dir()
        .filter(|h| !h.as_os_str().is_empty())
        .ok_or(OcmError::HomeNotFound)?;
    Ok(global_target_dir_in(&home))
}

pub fn global_target_dir_in(home: &Path) -> PathBuf {
    home.join(GLOBAL_CONFIG_DIR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let target = Path::new("/tmp/proj");
        assert_eq!(
            config_path(target),
            PathBuf::from("/tmp/proj/opencode.json")
        );
        assert_eq!(
            target.join(SKILL_FILE),
            PathBuf::from("/tmp/proj/.opencode/skill/context-update/SKILL.md")
        );
    }

    #[test]
    fn global_dir_is_under_home() {
        assert_eq!(
            global_target_dir_in(Path::new("/home/alice")),
            PathBuf::from("/home/alice/.config/opencode")
        );
    }
}
