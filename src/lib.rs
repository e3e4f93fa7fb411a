pub mod config;
pub mod fs_op;
pub mod logging;
pub mod ops;

pub use crate::config::PathOpsConfig;
pub use crate::fs_op::{FsOpError, Result};
pub use crate::ops::PathOps;
