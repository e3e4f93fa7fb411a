use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
///
/// Unlike `Path::is_dir`/`Path::is_file` this does not follow a trailing
/// symlink: a link is reported as `Symlink` whatever it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path (not even a dangling link).
    NotFound,
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link, dangling or not.
    Symlink,
    /// Anything else (socket, FIFO, device node).
    Other,
}

impl PathType {
    /// Classify `path` using `symlink_metadata`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::symlink_metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(md) => {
                let ft = md.file_type();
                if ft.is_symlink() {
                    PathType::Symlink
                } else if ft.is_dir() {
                    PathType::Directory
                } else if ft.is_file() {
                    PathType::File
                } else {
                    PathType::Other
                }
            }
        }
    }
}

/// Return `true` if any entry exists at `path`, including a dangling link.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if `path` is a directory, following symlinks.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Return `true` if `path` is a regular file, following symlinks.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Return `true` if `path` itself is a symbolic link.
pub fn is_symlink<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Symlink
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_missing_file_and_dir() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("gone");
        let file = tmp.path().join("e.txt");
        let dir = tmp.path().join("sub");
        fs::write(&file, b"hello").unwrap();
        fs::create_dir(&dir).unwrap();

        let kinds: Vec<_> = [&missing, &file, &dir].iter().map(PathType::of).collect();
        assert_eq!(kinds, [PathType::NotFound, PathType::File, PathType::Directory]);
        assert!(!exists(&missing) && exists(&file) && exists(&dir));
        assert!(!is_symlink(&file) && !is_symlink(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn links_are_reported_as_links_but_predicates_follow_them() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("sub");
        fs::create_dir(&dir).unwrap();
        let file = dir.join("a.php");
        fs::write(&file, b"").unwrap();

        let file_link = tmp.path().join("file.link");
        let dir_link = tmp.path().join("dir.link");
        std::os::unix::fs::symlink(&file, &file_link).unwrap();
        std::os::unix::fs::symlink(&dir, &dir_link).unwrap();

        assert_eq!(PathType::of(&file_link), PathType::Symlink);
        assert_eq!(PathType::of(&dir_link), PathType::Symlink);
        assert!(is_file(&file_link) && !is_dir(&file_link));
        assert!(is_dir(&dir_link) && !is_file(&dir_link));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_link_still_exists() {
        let tmp = tempdir().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();
        assert_eq!(PathType::of(&link), PathType::Symlink);
        assert!(exists(&link));
        assert!(is_symlink(&link));
        assert!(!is_file(&link));
    }
}
