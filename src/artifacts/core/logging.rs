//! Diagnostic logging
//!
//! Logs are written to stderr so that stdout only ever carries command
//! output. `RUST_LOG` takes precedence over the verbosity requested on the
//! command line.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "hashdiff=warn",
        1 => "hashdiff=info",
        2 => "hashdiff=debug",
        _ => "hashdiff=trace",
    }
}

/// Install the global subscriber
///
/// Only the first call has any effect.
pub fn init(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // another subscriber may already be installed by an embedding program
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
