//! `tracing` subscriber setup for the `pathops` binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! caller.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise the
/// level is `warn`, or `debug` when `verbose` is true.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (tests calling in-process) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
