use std::fs;
use std::path::Path;

use crate::fs_op::error::Result;
use crate::fs_op::stat::PathType;

/// Return `true` when `folder` has no direct children.
///
/// Hidden entries count as children.
pub fn is_empty<P: AsRef<Path>>(folder: P) -> Result<bool> {
    Ok(fs::read_dir(folder.as_ref())?.next().is_none())
}

/// Delete everything inside `folder`, leaving `folder` itself in place.
///
/// Children are classified without following symlinks: directories are
/// flushed recursively and then removed, every other entry (files, links,
/// special files) is unlinked. A link to a directory is removed, never
/// descended into.
///
/// The first failing unlink or rmdir aborts the walk; whatever was removed
/// before it stays removed.
pub fn flush_folder<P: AsRef<Path>>(folder: P) -> Result<()> {
    for entry in fs::read_dir(folder.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            flush_folder(&path)?;
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        tracing::debug!("removed {}", path.display());
    }
    Ok(())
}

/// Remove `folder` and everything below it.
///
/// If `folder` is not a directory this is a no-op, so callers can attempt
/// removal without checking for existence first. If `folder` is a symlink to
/// a directory only the link is removed; the directory behind it is kept.
pub fn remove_folder<P: AsRef<Path>>(folder: P) -> Result<()> {
    let p = folder.as_ref();
    match PathType::of(p) {
        PathType::Directory => {}
        PathType::Symlink if p.is_dir() => {
            // Windows directory links are removed like directories.
            #[cfg(windows)]
            fs::remove_dir(p)?;
            #[cfg(not(windows))]
            fs::remove_file(p)?;
            tracing::debug!("removed link {}", p.display());
            return Ok(());
        }
        _ => return Ok(()),
    }

    flush_folder(p)?;
    fs::remove_dir(p)?;
    tracing::debug!("removed folder {}", p.display());
    Ok(())
}
