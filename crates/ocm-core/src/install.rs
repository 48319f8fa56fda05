use crate::assets::{Asset, AssetSource};
use crate::error::Result;
use crate::init::Outcome;
use crate::io;
use crate::prompt::{should_overwrite, Console};
use std::path::Path;

/// Copy `asset` into `target`.
///
/// The source is loaded before the user is asked anything, so a broken
/// installation fails with `MissingAsset` without touching the target.
/// Existing destinations are only replaced when [`should_overwrite`] allows it.
pub fn install_asset(
    target: &Path,
    asset: &Asset,
    source: &dyn AssetSource,
    force: bool,
    console: &mut dyn Console,
) -> Result<Outcome> {
    let data = source.load(asset.source)?;
    let dest = asset.dest_path(target);
    let existed = dest.exists();

    if !should_overwrite(&dest, force, console)? {
        tracing::debug!(asset = asset.name, dest = %dest.display(), "skipped");
        return Ok(Outcome::Skipped);
    }

    io::atomic_write(&dest, &data)?;
    tracing::debug!(asset = asset.name, dest = %dest.display(), bytes = data.len(), "installed");

    Ok(if existed {
        Outcome::Updated
    } else {
        Outcome::Created
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{DirAssets, COMMAND, SKILL};
    use crate::error::OcmError;
    use crate::testing::ScriptedConsole;
    use tempfile::TempDir;

    const SKILL_BODY: &[u8] = b"---\nname: context-update\n---\n\nbody\n";

    fn asset_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let skill = dir.path().join(SKILL.source);
        std::fs::create_dir_all(skill.parent().unwrap()).unwrap();
        std::fs::write(&skill, SKILL_BODY).unwrap();
        dir
    }

    #[test]
    fn creates_destination_and_parents() {
        let assets = asset_dir();
        let target = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();

        let outcome = install_asset(
            target.path(),
            &SKILL,
            &DirAssets::new(assets.path()),
            false,
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Created);
        assert_eq!(
            std::fs::read(target.path().join(SKILL.dest)).unwrap(),
            SKILL_BODY
        );
        assert!(console.questions.is_empty());
    }

    #[test]
    fn declined_overwrite_leaves_file_untouched() {
        let assets = asset_dir();
        let target = TempDir::new().unwrap();
        let dest = SKILL.dest_path(target.path());
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, b"my edits").unwrap();
        let mut console = ScriptedConsole::new(["n"]);

        let outcome = install_asset(
            target.path(),
            &SKILL,
            &DirAssets::new(assets.path()),
            false,
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert!(!outcome.changed());
        assert_eq!(std::fs::read(&dest).unwrap(), b"my edits");
        assert_eq!(console.questions.len(), 1);
    }

    #[test]
    fn accepted_overwrite_copies_source() {
        let assets = asset_dir();
        let target = TempDir::new().unwrap();
        let dest = SKILL.dest_path(target.path());
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, b"old").unwrap();
        let mut console = ScriptedConsole::new(["y"]);

        let outcome = install_asset(
            target.path(),
            &SKILL,
            &DirAssets::new(assets.path()),
            false,
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Updated);
        assert!(outcome.changed());
        assert_eq!(std::fs::read(&dest).unwrap(), SKILL_BODY);
    }

    #[test]
    fn force_overwrites_without_asking() {
        let assets = asset_dir();
        let target = TempDir::new().unwrap();
        let dest = SKILL.dest_path(target.path());
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, b"old").unwrap();
        let mut console = ScriptedConsole::default();

        let outcome = install_asset(
            target.path(),
            &SKILL,
            &DirAssets::new(assets.path()),
            true,
            &mut console,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Updated);
        assert!(console.questions.is_empty());
        assert_eq!(std::fs::read(&dest).unwrap(), SKILL_BODY);
    }

    #[test]
    fn missing_source_fails_before_prompting() {
        let assets = asset_dir();
        let target = TempDir::new().unwrap();
        let dest = COMMAND.dest_path(target.path());
        std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
        std::fs::write(&dest, b"existing").unwrap();
        let mut console = ScriptedConsole::new(["y"]);

        let err = install_asset(
            target.path(),
            &COMMAND,
            &DirAssets::new(assets.path()),
            false,
            &mut console,
        )
        .unwrap_err();

        assert!(matches!(err, OcmError::MissingAsset(_)));
        assert!(console.questions.is_empty());
        assert_eq!(std::fs::read(&dest).unwrap(), b"existing");
    }
}
