//! Tracing setup
//!
//! Events go to stderr so they never mix with command output on stdout.
//! `EXPENSES_LOG` takes an `EnvFilter` directive string; without it only
//! warnings from this crate are shown (`debug` with `--verbose`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "EXPENSES_LOG";

static TRACING_INIT: Once = Once::new();

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "expense_tracker=debug"
    } else {
        "expense_tracker=warn"
    }
}

/// Initialize the global tracing subscriber. Later calls are ignored.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
