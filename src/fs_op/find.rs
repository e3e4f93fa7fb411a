//! Recursive file discovery.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs_op::path::canonicalize;

/// Lazily walk `folder` and yield every regular file below it, optionally
/// only those whose extension matches `extension` case-insensitively.
/// The extension is the text after the last `.` of the file name, so
/// `Some("")` selects files without one.
///
/// A missing folder, or one that is not a directory, yields nothing. The
/// folder is canonicalized first, so yielded paths are absolute. Order is
/// whatever the directory walk produces.
pub fn find<P: AsRef<Path>>(folder: P, extension: Option<&str>) -> Find {
    Find::new(folder.as_ref(), extension, false)
}

/// Iterator returned by [`find`].
///
/// It is single-pass: call `find` again to walk the tree again.
pub struct Find {
    walker: Option<walkdir::IntoIter>,
    extension: Option<String>,
    found: usize,
}

impl Find {
    pub(crate) fn new(folder: &Path, extension: Option<&str>, follow_links: bool) -> Self {
        let walker = if folder.is_dir() {
            canonicalize(folder).map(|root| {
                WalkDir::new(root)
                    .min_depth(1)
                    .follow_links(follow_links)
                    .into_iter()
            })
        } else {
            None
        };
        Find {
            walker,
            extension: extension.map(|e| e.trim_start_matches('.').to_owned()),
            found: 0,
        }
    }

    /// Number of paths yielded so far.
    pub fn found(&self) -> usize {
        self.found
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.extension {
            None => true,
            Some(wanted) => path
                .file_name()
                .map(OsStr::to_string_lossy)
                .is_some_and(|name| extension_of(&name).eq_ignore_ascii_case(wanted)),
        }
    }
}

/// Everything after the last `.` of a file name, or `""` without one.
///
/// Unlike `Path::extension`, a dotfile such as `.htaccess` has the
/// extension `htaccess`.
fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

impl Iterator for Find {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };

            // With follow_links the file type already describes the target;
            // without it a link to a file still counts as a file.
            let ft = entry.file_type();
            let is_file = ft.is_file() || (ft.is_symlink() && entry.path().is_file());
            if !is_file || !self.matches(entry.path()) {
                continue;
            }

            self.found += 1;
            return Some(entry.into_path());
        }
    }
}
