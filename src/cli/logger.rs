//! Diagnostic logging on stderr.

use std::{env, io};

use tracing_subscriber::EnvFilter;

/// Crate debug events plus warnings from dependencies.
const VERBOSE_FILTER: &str = "warn,jsoncode=debug";

/// Installs the stderr subscriber. Debug output is shown only in verbose mode.
pub fn init(verbose: bool) {
    let filter = EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" });
    let ansi = env::var_os("NO_COLOR").is_none();

    // A second call keeps the already installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
