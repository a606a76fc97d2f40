//! Diagnostic logging for the CLI.
//!
//! Library crates emit `tracing` events; this installs the subscriber that
//! prints them. Diagnostics go to stderr so stdout stays clean for `--json`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
