//! Diagnostic logging on stderr.
//!
//! `RUST_LOG` wins when set, e.g. `RUST_LOG=symkeys_build=debug` shows every
//! dropped node. Otherwise `-v` raises the level one step per repetition.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub(crate) fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
