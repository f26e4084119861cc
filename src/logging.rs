//! Diagnostic tracing for the replay binary.
//!
//! Library crates only emit `tracing` events; this is the one place a
//! subscriber is installed. Output goes to stderr so stdout stays clean for
//! the scoreboard or JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `debug` when `verbose` is set.
///
/// ```bash
/// RUST_LOG=tennis_scorer_core=debug tennis-scorer --points 1111
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
