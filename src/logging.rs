//! Logging setup
//!
//! Log records go to stderr through `tracing`. Verbosity comes from the
//! command line unless `VOCAB_BUILD_LOG` holds a filter directive.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity flags
pub const LOG_ENV: &str = "VOCAB_BUILD_LOG";

/// Maps a verbosity count to a tracing directive
///
/// 0 → warn, 1 → info, 2 → debug, 3+ → trace
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
