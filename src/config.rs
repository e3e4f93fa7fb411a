//! Runtime configuration for `PathOps`, read from TOML.
//!
//! ```toml
//! # permissions for directories created by mkdir/save/symlink
//! dir_mode = 0o755
//! # descend into symlinked directories during discovery
//! follow_links = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::fs_op::create::DEFAULT_DIR_MODE;
use crate::fs_op::error::{FsOpError, Result};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathOpsConfig {
    /// Mode for newly created directories, before the umask.
    pub dir_mode: u32,
    /// Whether discovery descends into symlinked directories.
    pub follow_links: bool,
}

impl Default for PathOpsConfig {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
            follow_links: false,
        }
    }
}

impl PathOpsConfig {
    /// Parse a configuration from TOML text. `origin` only labels errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let cfg: Self = toml::from_str(text).map_err(|e| FsOpError::Config {
            path: origin.to_path_buf(),
            msg: e.to_string(),
        })?;
        if cfg.dir_mode > 0o7777 {
            return Err(FsOpError::Config {
                path: origin.to_path_buf(),
                msg: format!("dir_mode {:#o} is not a permission mode", cfg.dir_mode),
            });
        }
        Ok(cfg)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the per-user default
    /// location is tried and a missing file there yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|e| FsOpError::Config {
            path: path.clone(),
            msg: e.to_string(),
        })?;
        let cfg = Self::from_toml_str(&text, &path)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }
}

/// Per-user config file location, e.g. `~/.config/pathops/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    directories_next::ProjectDirs::from("", "", "pathops").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = PathOpsConfig::from_toml_str("", Path::new("inline")).unwrap();
        assert_eq!(cfg, PathOpsConfig::default());
        assert_eq!(cfg.dir_mode, 0o777);
    }

    #[test]
    fn parses_octal_mode_and_flag() {
        let cfg = PathOpsConfig::from_toml_str("dir_mode = 0o750\nfollow_links = true\n", Path::new("inline")).unwrap();
        assert_eq!(cfg.dir_mode, 0o750);
        assert!(cfg.follow_links);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_modes() {
        assert!(PathOpsConfig::from_toml_str("colour = 1", Path::new("inline")).is_err());
        assert!(PathOpsConfig::from_toml_str("dir_mode = 0o70000", Path::new("inline")).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let td = tempdir().unwrap();
        let err = PathOpsConfig::load(Some(&td.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, FsOpError::Config { .. }));
    }

    #[test]
    fn explicit_file_is_read() {
        let td = tempdir().unwrap();
        let file = td.path().join("cfg.toml");
        std::fs::write(&file, "dir_mode = 0o700").unwrap();
        assert_eq!(PathOpsConfig::load(Some(&file)).unwrap().dir_mode, 0o700);
    }
}
