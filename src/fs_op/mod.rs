//! Filesystem primitives: discovery, load/save, idempotent mkdir and
//! symlink, tree removal and upward-pruning wipe.
//!
//! Each submodule works on plain paths with built-in defaults. Use
//! [`crate::PathOps`] to apply a [`crate::PathOpsConfig`].

pub mod content;
pub mod create;
pub mod error;
pub mod find;
pub mod path;
pub mod remove;
pub mod stat;
pub mod symlink;
pub mod wipe;

pub use content::{load, load_string, save};
pub use create::{mkdir_idempotent, mkdir_with_mode};
pub use error::{FsOpError, Result};
pub use find::{find, Find};
pub use remove::{flush_folder, is_empty, remove_folder};
pub use symlink::symlink_idempotent;
pub use wipe::{wipe, wipe_with_report, WipeReport, WipeStop};
