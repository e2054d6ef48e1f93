//! Diagnostic tracing for the `katas` binary.
//!
//! Answers go to stdout; tracing output always goes to stderr so it never
//! mixes with them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from `katas.toml`,
/// `warn` by default) is used. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=katas=debug katas brackets '{[()]}'
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
