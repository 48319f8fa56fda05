use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Readers see either the old content or the new content, never a partial file.
///
/// A symlink at `path` is written through, not replaced. An existing file keeps
/// its permissions; a new file gets the same mode `File::create` would give it.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let path = write_target(path)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = new_temp_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    match std::fs::metadata(&path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tmp.persist(&path).map_err(|e| e.error)?;
    Ok(())
}

/// The file a write to `path` should land in: the link target when `path` is
/// a symlink (dangling links included), otherwise `path` itself.
fn write_target(path: &Path) -> Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match std::fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let link = std::fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            }
            Err(e) => Err(e.into()),
        },
        _ => Ok(path.to_path_buf()),
    }
}

/// Tempfile opened with mode 0666 so the process umask applies, as it does
/// for `File::create`. tempfile's default is owner-only.
#[cfg(unix)]
fn new_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
