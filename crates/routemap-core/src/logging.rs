//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout carries only the route report.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "ROUTEMAP_LOG";

/// Install the global subscriber. `default_filter` applies when
/// `ROUTEMAP_LOG` is unset or invalid. Calling twice is a no-op.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
