//! `PathOps`: the filesystem helpers bundled with a configuration.
//!
//! The free functions in `crate::fs_op` use built-in defaults; `PathOps`
//! threads `PathOpsConfig` through them (directory mode, link following).

use std::path::Path;

use crate::config::PathOpsConfig;
use crate::fs_op::content;
use crate::fs_op::create::mkdir_with_mode;
use crate::fs_op::error::Result;
use crate::fs_op::find::Find;
use crate::fs_op::remove;
use crate::fs_op::symlink::symlink_with_mode;
use crate::fs_op::wipe::{self, WipeReport};

#[derive(Debug, Clone, Default)]
pub struct PathOps {
    config: PathOpsConfig,
}

impl PathOps {
    pub fn new(config: PathOpsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathOpsConfig {
        &self.config
    }

    /// Lazily yield files below `folder`, optionally filtered by extension.
    /// See [`crate::fs_op::find::find`].
    pub fn find<P: AsRef<Path>>(&self, folder: P, extension: Option<&str>) -> Find {
        Find::new(folder.as_ref(), extension, self.config.follow_links)
    }

    /// Content of a regular file, or `None` when there is none.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Option<Vec<u8>>> {
        content::load(path)
    }

    pub fn load_string<P: AsRef<Path>>(&self, path: P) -> Result<Option<String>> {
        content::load_string(path)
    }

    /// Write `data`, creating parent directories with the configured mode.
    pub fn save<P: AsRef<Path>>(&self, path: P, data: &[u8]) -> Result<()> {
        content::save_with_mode(path, data, self.config.dir_mode)
    }

    pub fn mkdir<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        mkdir_with_mode(dir, self.config.dir_mode)
    }

    pub fn symlink<P: AsRef<Path>, Q: AsRef<Path>>(&self, target: P, link: Q) -> Result<()> {
        symlink_with_mode(target.as_ref(), link.as_ref(), self.config.dir_mode)
    }

    pub fn is_empty<P: AsRef<Path>>(&self, folder: P) -> Result<bool> {
        remove::is_empty(folder)
    }

    pub fn flush_folder<P: AsRef<Path>>(&self, folder: P) -> Result<()> {
        remove::flush_folder(folder)
    }

    pub fn remove_folder<P: AsRef<Path>>(&self, folder: P) -> Result<()> {
        remove::remove_folder(folder)
    }

    /// Remove `root` + `relative` and prune emptied parents below `root`.
    /// `Ok(false)` when `root` does not resolve.
    pub fn wipe<P: AsRef<Path>, Q: AsRef<Path>>(&self, root: P, relative: Q) -> Result<bool> {
        wipe::wipe(root, relative)
    }

    pub fn wipe_with_report<P: AsRef<Path>, Q: AsRef<Path>>(&self, root: P, relative: Q) -> Result<Option<WipeReport>> {
        wipe::wipe_with_report(root, relative)
    }
}
