use std::path::Path;

use crate::fs_op::error::{FsOpError, Result};

/// Permissions used for new directories before the umask is applied.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Ensure `dir` and all missing ancestors exist, using `DEFAULT_DIR_MODE`.
pub fn mkdir_idempotent<P: AsRef<Path>>(dir: P) -> Result<()> {
    mkdir_with_mode(dir, DEFAULT_DIR_MODE)
}

/// Ensure `dir` and all missing ancestors exist.
///
/// An existing directory is a success without effect. If creation fails but
/// the directory exists afterwards (another actor created it concurrently),
/// that is also a success. Any other failure, including `dir` being taken
/// by a non-directory, is `FsOpError::DirectoryCreation`.
///
/// `mode` is ignored on platforms without Unix permissions.
pub fn mkdir_with_mode<P: AsRef<Path>>(dir: P, mode: u32) -> Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    settle(dir, builder.create(dir))
}

// A failed create still counts when the directory exists afterwards.
fn settle(dir: &Path, outcome: std::io::Result<()>) -> Result<()> {
    match outcome {
        Ok(()) => {
            tracing::debug!("created directory {}", dir.display());
            Ok(())
        }
        Err(e) if dir.is_dir() => {
            tracing::debug!("{} appeared while creating it: {}", dir.display(), e);
            Ok(())
        }
        Err(source) => Err(FsOpError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
