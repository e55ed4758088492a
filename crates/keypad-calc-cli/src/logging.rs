//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries results. `RUST_LOG` overrides
//! the filter derived from `-v`/`-q`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level, honoring `RUST_LOG` when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber.
///
/// Returns false when a subscriber was already installed; the existing one
/// stays in place.
pub fn init(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_verbose())
        .try_init()
        .is_ok()
}
