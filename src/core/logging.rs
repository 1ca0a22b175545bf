//! Diagnostic logging setup.
//!
//! User-facing progress is printed directly; `tracing` carries the
//! diagnostics (request URLs, cache decisions, subprocess commands) to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "espn_ffl_history=info";
const VERBOSE_FILTER: &str = "espn_ffl_history=debug,info";

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
