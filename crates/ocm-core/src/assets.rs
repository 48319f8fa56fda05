//! Bundled asset files and where their bytes come from.
//!
//! Release builds embed `assets/` from the workspace root into the binary.
//! A directory on disk can be substituted with [`DirAssets`], which is how
//! packagers ship loose asset files and how tests exercise the
//! missing-asset path.

use crate::error::{OcmError, Result};
use crate::paths;
use rust_embed::Embed;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A static file copied verbatim into the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    /// Path inside the bundled assets directory.
    pub source: &'static str,
    /// Path relative to the install target.
    pub dest: &'static str,
}

impl Asset {
    pub fn dest_path(&self, target: &Path) -> PathBuf {
        target.join(self.dest)
    }
}

pub const SKILL: Asset = Asset {
    name: "skill",
    source: "skill/context-update/SKILL.md",
    dest: paths::SKILL_FILE,
};

pub const COMMAND: Asset = Asset {
    name: "command",
    source: "command/context-update.md",
    dest: paths::COMMAND_FILE,
};

/// Install order.
pub const ALL: [Asset; 2] = [SKILL, COMMAND];

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

pub trait AssetSource {
    /// Bytes of the asset at `relative`, or `OcmError::MissingAsset`.
    fn load(&self, relative: &str) -> Result<Cow<'static, [u8]>>;
}

#[derive(Embed)]
#[folder = "../../assets/"]
struct Bundled;

/// Assets compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self, relative: &str) -> Result<Cow<'static, [u8]>> {
        <Bundled as Embed>::get(relative)
            .map(|file| file.data)
            .ok_or_else(|| OcmError::MissingAsset(PathBuf::from("assets").join(relative)))
    }
}

/// Assets read from a directory at runtime.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn load(&self, relative: &str) -> Result<Cow<'static, [u8]>> {
        let path = self.root.join(relative);
        match std::fs::read(&path) {
            Ok(data) => Ok(Cow::Owned(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OcmError::MissingAsset(path))
            }
            Err(e) => Err(e.into()),
        }
    }
}
