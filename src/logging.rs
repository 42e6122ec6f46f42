//! Diagnostic logging on stderr via [`tracing`].
//!
//! Search results are console output and never go through here; this channel
//! only carries diagnostics such as load timings and skipped-line warnings.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else selects one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive.
///
/// Priority: `RUST_LOG` > `--verbose` > config `log_level` > [`DEFAULT_LOG_LEVEL`].
fn filter(verbose: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(verbose: bool, config_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
