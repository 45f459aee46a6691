//! Diagnostic tracing.
//!
//! Validation results are returned to the caller, never logged. Tracing
//! covers diagnostics only: unknown rules, unbound parameters, cards the
//! lookup could not find.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to `default_filter` when it is unset or
/// invalid. Output goes to stderr in compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=servo_validator=debug servo-validate --cards cards.json --decklist deck.txt
/// ```
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
