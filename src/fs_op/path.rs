//! Path helpers shared by discovery and wipe.
//!
//! Everything here is structured `Path` manipulation; no helper treats a
//! path as a string, so separators are handled per platform.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` to its canonical form (absolute, symlinks resolved).
///
/// Returns `None` when the path does not exist or cannot be resolved,
/// mirroring a failed `realpath`.
pub fn canonicalize<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    std::fs::canonicalize(path.as_ref()).ok()
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// `..` directly below the root stays at the root. Leading `..` components
/// of a relative path are kept.
pub fn normalize_lexically<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.as_ref().components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Append `relative` below `root` the way string concatenation would:
/// a leading separator (or drive prefix) on `relative` does not replace
/// `root`. The result is lexically normalized.
pub fn join_relative<P: AsRef<Path>, Q: AsRef<Path>>(root: P, relative: Q) -> PathBuf {
    let mut joined = root.as_ref().to_path_buf();
    for comp in relative.as_ref().components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    normalize_lexically(joined)
}

/// Canonical location of the entry at `path` without following the final
/// component: the parent is canonicalized and the file name re-attached.
///
/// A symlink leaf is therefore addressed as itself rather than as its
/// target. Returns `None` when nothing exists at `path` (a dangling link
/// does exist).
pub fn canonical_location<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let p = path.as_ref();
    std::fs::symlink_metadata(p).ok()?;
    match (p.parent(), p.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            canonicalize(parent).map(|dir| dir.join(name))
        }
        (Some(_), Some(name)) => canonicalize(".").map(|dir| dir.join(name)),
        _ => canonicalize(p),
    }
}
