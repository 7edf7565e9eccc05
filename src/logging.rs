//! Tracing subscriber setup.
//!
//! Logs go to stderr so that command output on stdout stays usable in scripts.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the default filter: `--verbose` wins over the configured level.
pub fn default_filter(verbose: bool, configured: &str) -> String {
    if verbose {
        "debug".to_string()
    } else {
        configured.to_lowercase()
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool, configured: &str) {
    let filter = default_filter(verbose, configured);
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
