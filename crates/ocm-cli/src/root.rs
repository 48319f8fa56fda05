use anyhow::Context;
use std::path::PathBuf;

/// Resolve the install target.
///
/// - `--global`: `~/.config/opencode` (fails if no home directory is known)
/// - otherwise: the current working directory
pub fn resolve_target(global: bool) -> anyhow::Result<PathBuf> {
    if global {
        return ocm_core::paths::global_target_dir()
            .context("cannot resolve the global install directory");
    }
    std::env::current_dir().context("cannot read the current directory")
}
