use crate::console::TerminalConsole;
use crate::output;
use anyhow::Context;
use ocm_core::assets::{AssetSource, DirAssets, EmbeddedAssets};
use ocm_core::{run_init, InitOptions};
use std::path::Path;

/// `opencode-context-manager init`: install the skill and command files and,
/// for local installs, register the context file in `opencode.json`.
pub fn run(target: &Path, options: InitOptions, assets_dir: Option<&Path>) -> anyhow::Result<()> {
    let source: Box<dyn AssetSource> = match assets_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using assets from disk");
            Box::new(DirAssets::new(dir))
        }
        None => Box::new(EmbeddedAssets),
    };

    output::print_banner(target);

    let stdin = std::io::stdin();
    let mut console = TerminalConsole::new(stdin.lock(), target);
    let summary = run_init(target, options, source.as_ref(), &mut console)
        .with_context(|| format!("failed to initialize {}", target.display()))?;

    output::print_summary(&summary);
    Ok(())
}
