//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BURNDOWN_LOG";

/// Filter used when `BURNDOWN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "burndown=warn";

static INIT: Once = Once::new();

/// Initialize the burndown tracing/logging system.
///
/// Reads `BURNDOWN_LOG` for filter directives, e.g.
/// `BURNDOWN_LOG=burndown::engine=trace`. Logs are written to stderr so
/// they never mix with rendered reports on stdout.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (tests, embedding apps).
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("still alive");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
