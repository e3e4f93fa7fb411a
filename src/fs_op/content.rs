//! Whole-file load and save.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::fs_op::create::{mkdir_with_mode, DEFAULT_DIR_MODE};
use crate::fs_op::error::Result;

/// Read the content of `path`.
///
/// Returns `Ok(None)` when nothing exists at `path` or it is not a regular
/// file (after following symlinks). A read failure on an existing file is an
/// error.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>> {
    let p = path.as_ref();
    if !p.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read(p)?))
}

/// Like [`load`] but decodes the content as UTF-8.
pub fn load_string<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    match load(path)? {
        None => Ok(None),
        Some(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into()),
    }
}

/// Write `content` to `path`, creating missing parent directories first.
pub fn save<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    save_with_mode(path, content, DEFAULT_DIR_MODE)
}

/// [`save`] with an explicit mode for created parent directories.
///
/// The file is opened without truncation, locked exclusively, then
/// truncated and written, so a concurrent writer holding the lock never sees
/// its data cut short. The lock is released when the handle is dropped.
pub(crate) fn save_with_mode<P: AsRef<Path>>(path: P, content: &[u8], dir_mode: u32) -> Result<()> {
    let p = path.as_ref();
    if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
        mkdir_with_mode(parent, dir_mode)?;
    }

    let mut file = OpenOptions::new().write(true).create(true).truncate(false).open(p)?;
    lock_exclusive(&file)?;
    file.set_len(0)?;
    file.write_all(content)?;
    file.flush()?;
    tracing::debug!("saved {} bytes to {}", content.len(), p.display());
    Ok(())
}

#[cfg(unix)]
fn lock_exclusive(file: &fs::File) -> io::Result<()> {
    use nix::fcntl::{flock, FlockArg};
    use std::os::unix::io::AsRawFd;
    flock(file.as_raw_fd(), FlockArg::LockExclusive).map_err(io::Error::from)
}

#[cfg(not(unix))]
fn lock_exclusive(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
