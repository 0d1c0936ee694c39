//! Structured logging for test runs.
//!
//! The harness emits `tracing` events (arrangement at `debug`, each case at `trace`, unresolved declared cases at
//! `warn`, a failing case at `error`). Nothing is printed unless a subscriber is installed; tests that want the
//! output call [`init`] first and set `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a `fmt` subscriber writing through libtest's captured output.
///
/// Safe to call from every test: only the first call on a process installs the subscriber.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with_test_writer()
        .try_init();
}
