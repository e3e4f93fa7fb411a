use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers and `PathOps`.
///
/// Absence is never an error here: a missing file on load, a missing folder
/// on discovery or removal, and an unresolvable wipe root are reported as
/// plain values by the operations themselves.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors (unlink, rmdir, read, write, link).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory could not be created and does not exist afterwards.
    #[error("Directory `{}` was not created: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The symlink target is not an existing regular file.
    #[error("This is not a file: {}", .0.display())]
    InvalidTarget(PathBuf),

    /// A configuration file could not be read or parsed.
    #[error("Invalid configuration in `{}`: {msg}", path.display())]
    Config { path: PathBuf, msg: String },
}

/// Result alias used throughout `fs_op`.
pub type Result<T> = std::result::Result<T, FsOpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_path() {
        let err = FsOpError::InvalidTarget(PathBuf::from("/nope/abc"));
        assert_eq!(err.to_string(), "This is not a file: /nope/abc");

        let err = FsOpError::DirectoryCreation {
            path: PathBuf::from("/ro/dir"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("Directory `/ro/dir` was not created"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
