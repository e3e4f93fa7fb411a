//! Remove a path below a root and prune the directories it leaves empty.
//!
//! The walk goes upward one component at a time. Every step resolves the
//! current entry to its canonical location and compares it with the
//! canonical root by equality, so a root reached through a symlink, or a
//! relative path containing `..`, can never lead the walk above the root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_op::error::Result;
use crate::fs_op::path::{canonical_location, canonicalize, join_relative};
use crate::fs_op::remove::is_empty;
use crate::fs_op::stat::PathType;

/// Why a wipe stopped ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WipeStop {
    /// The walk arrived at the root, which is never removed.
    ReachedRoot,
    /// This directory still has children, so it and its ancestors stay.
    NotEmpty(PathBuf),
    /// The entry resolved somewhere outside the root and was left alone.
    OutsideRoot(PathBuf),
    /// An ancestor is a symlink. Links are only removed as the wiped entry
    /// itself, never while climbing.
    Link(PathBuf),
}

/// What a wipe removed, in removal order, and where it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeReport {
    pub removed: Vec<PathBuf>,
    pub stop: WipeStop,
}

/// Outcome of a single step.
enum Step {
    Ascend,
    Stop(WipeStop),
}

/// Remove `root` + `relative` and every ancestor it leaves empty, up to but
/// not including `root`.
///
/// Returns `Ok(false)` when `root` cannot be resolved; nothing is touched in
/// that case. Otherwise returns `Ok(true)`, whether the walk went all the way
/// up or stopped at a non-empty directory.
pub fn wipe<P: AsRef<Path>, Q: AsRef<Path>>(root: P, relative: Q) -> Result<bool> {
    Ok(wipe_with_report(root, relative)?.is_some())
}

/// [`wipe`] returning what was removed. `Ok(None)` means `root` could not
/// be resolved.
pub fn wipe_with_report<P: AsRef<Path>, Q: AsRef<Path>>(root: P, relative: Q) -> Result<Option<WipeReport>> {
    let Some(root) = canonicalize(root) else {
        return Ok(None);
    };

    let mut current = join_relative(&root, relative);
    let mut removed = Vec::new();
    let mut leaf = true;

    let stop = loop {
        let next = step(&root, &current, leaf, &mut removed)?;
        leaf = false;
        match next {
            Step::Stop(why) => break why,
            Step::Ascend => match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break WipeStop::ReachedRoot,
            },
        }
    };

    tracing::debug!(
        "wiped {} entries below {}, stopped: {:?}",
        removed.len(),
        root.display(),
        stop
    );
    Ok(Some(WipeReport { removed, stop }))
}

fn step(root: &Path, current: &Path, leaf: bool, removed: &mut Vec<PathBuf>) -> Result<Step> {
    // Already gone: keep climbing.
    let Some(location) = canonical_location(current) else {
        return Ok(Step::Ascend);
    };

    if location == root {
        return Ok(Step::Stop(WipeStop::ReachedRoot));
    }
    if !location.starts_with(root) {
        return Ok(Step::Stop(WipeStop::OutsideRoot(location)));
    }

    match PathType::of(&location) {
        PathType::NotFound => return Ok(Step::Ascend),
        PathType::Directory => {
            if !is_empty(&location)? {
                return Ok(Step::Stop(WipeStop::NotEmpty(location)));
            }
            fs::remove_dir(&location)?;
        }
        PathType::Symlink if !leaf => {
            // An ancestor reached through a link: judge the directory behind
            // it, and leave the link in place either way.
            if let Some(target) = canonicalize(&location).filter(|t| t.is_dir()) {
                if !is_empty(&target)? {
                    return Ok(Step::Stop(WipeStop::NotEmpty(target)));
                }
            }
            return Ok(Step::Stop(WipeStop::Link(location)));
        }
        _ => fs::remove_file(&location)?,
    }

    tracing::debug!("wipe removed {}", location.display());
    removed.push(location);
    Ok(Step::Ascend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn root_of(td: &tempfile::TempDir) -> PathBuf {
        canonicalize(td.path()).expect("canonical tempdir")
    }

    #[test]
    fn prunes_up_to_root() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::write(root.join("a/b/c/file.txt"), b"x").unwrap();

        let report = wipe_with_report(&root, "/a/b/c/file.txt").unwrap().unwrap();
        assert_eq!(
            report.removed,
            vec![
                root.join("a/b/c/file.txt"),
                root.join("a/b/c"),
                root.join("a/b"),
                root.join("a"),
            ]
        );
        assert_eq!(report.stop, WipeStop::ReachedRoot);
        assert!(root.is_dir());
        assert!(!root.join("a").exists());
    }

    #[test]
    fn stops_at_surviving_sibling() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/file.txt"), b"x").unwrap();
        fs::write(root.join("a/other.txt"), b"y").unwrap();

        let report = wipe_with_report(&root, "/a/b/file.txt").unwrap().unwrap();
        assert_eq!(report.stop, WipeStop::NotEmpty(root.join("a")));
        assert!(!root.join("a/b").exists());
        assert!(root.join("a/other.txt").is_file());
    }

    #[test]
    fn unresolvable_root_is_false() {
        let td = tempdir().unwrap();
        assert!(!wipe(td.path().join("missing"), "/x").unwrap());
    }

    #[test]
    fn missing_leaf_still_prunes_empty_parents() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        fs::create_dir_all(root.join("a/b")).unwrap();

        assert!(wipe(&root, "/a/b/gone.txt/").unwrap());
        assert!(!root.join("a").exists());
        assert!(root.is_dir());
    }

    #[test]
    fn wiping_the_root_itself_does_nothing() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        let report = wipe_with_report(&root, "").unwrap().unwrap();
        assert!(report.removed.is_empty());
        assert_eq!(report.stop, WipeStop::ReachedRoot);
        assert!(root.is_dir());
    }

    #[test]
    fn dot_dot_cannot_escape_root() {
        let td = tempdir().unwrap();
        let base = root_of(&td);
        let root = base.join("root");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::create_dir_all(base.join("sibling")).unwrap();
        fs::write(base.join("sibling/keep.txt"), b"k").unwrap();

        let report = wipe_with_report(&root, "/a/../../sibling/keep.txt").unwrap().unwrap();
        assert!(report.removed.is_empty());
        assert!(matches!(report.stop, WipeStop::OutsideRoot(_)));
        assert!(base.join("sibling/keep.txt").is_file());
        assert!(root.join("a").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn linked_ancestor_with_content_stops_and_survives() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        let real = root.join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("f.txt"), b"x").unwrap();
        fs::write(real.join("keep.txt"), b"k").unwrap();
        let link = root.join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let report = wipe_with_report(&root, "/link/f.txt").unwrap().unwrap();
        assert_eq!(report.removed, vec![real.join("f.txt")]);
        assert_eq!(report.stop, WipeStop::NotEmpty(real.clone()));
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(real.join("keep.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn linked_ancestor_left_in_place_when_emptied() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        let real = root.join("real");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("f.txt"), b"x").unwrap();
        let link = root.join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let report = wipe_with_report(&root, "link/f.txt").unwrap().unwrap();
        assert_eq!(report.removed, vec![real.join("f.txt")]);
        assert_eq!(report.stop, WipeStop::Link(link.clone()));
        assert!(fs::symlink_metadata(&link).is_ok());
        assert!(real.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn link_as_the_wiped_entry_is_removed() {
        let td = tempdir().unwrap();
        let root = root_of(&td);
        fs::create_dir_all(root.join("real/sub")).unwrap();
        fs::create_dir(root.join("links")).unwrap();
        std::os::unix::fs::symlink(root.join("real/sub"), root.join("links/sub")).unwrap();

        let report = wipe_with_report(&root, "/links/sub").unwrap().unwrap();
        assert_eq!(report.removed, vec![root.join("links/sub"), root.join("links")]);
        assert!(root.join("real/sub").is_dir());
    }
}
