//! Small utilities for working with symbolic links.
//!
//! `create_symlink` hides the Unix/Windows split; `symlink_idempotent` adds
//! the precondition and existence checks callers rely on.

use std::io;
use std::path::{Path, PathBuf};

use crate::fs_op::create::{mkdir_with_mode, DEFAULT_DIR_MODE};
use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::stat;

/// Create a symbolic link at `link` pointing to `target`, once.
///
/// - `target` must be an existing regular file, otherwise
///   `FsOpError::InvalidTarget`.
/// - If any entry already exists at `link` (a dangling link included) this
///   is a no-op success. The existing entry is not checked against `target`.
/// - Missing parent directories of `link` are created first.
pub fn symlink_idempotent<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link: Q) -> Result<()> {
    symlink_with_mode(target.as_ref(), link.as_ref(), DEFAULT_DIR_MODE)
}

pub(crate) fn symlink_with_mode(target: &Path, link: &Path, dir_mode: u32) -> Result<()> {
    if !stat::is_file(target) {
        return Err(FsOpError::InvalidTarget(target.to_path_buf()));
    }

    if stat::exists(link) {
        tracing::debug!("link {} already exists, leaving it", link.display());
        return Ok(());
    }

    if let Some(parent) = link.parent().filter(|d| !d.as_os_str().is_empty()) {
        mkdir_with_mode(parent, dir_mode)?;
    }

    create_symlink(target, link)?;
    tracing::debug!("linked {} -> {}", link.display(), target.display());
    Ok(())
}

/// Create a symbolic link at `dst` that points to `src`.
///
/// On Windows the link kind follows `src` (directory or file); a missing
/// `src` gets a file link.
pub fn create_symlink(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(src, dst)
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        let use_dir = src.metadata().map(|m| m.is_dir()).unwrap_or(false);
        if use_dir {
            symlink_dir(src, dst)
        } else {
            symlink_file(src, dst)
        }
    }
}

/// Read the target of a symbolic link.
pub fn read_symlink(path: &Path) -> io::Result<PathBuf> {
    path.read_link()
}
