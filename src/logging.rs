//! Diagnostic sink setup.
//!
//! Every violation is reported as one WARN record on the [`LOG_TARGET`]
//! target through `tracing`. Whatever subscriber the application installs
//! receives those records; without one they are dropped. The sink is
//! process-wide and should be in place before the first check runs.
//!
//! Applications without their own subscriber can call [`init`]:
//!
//! ```no_run
//! ensure::logging::init();
//! ```
//!
//! The filter is read from `ENSURE_LOG` (same syntax as `RUST_LOG`), falling
//! back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Target of the records emitted for violations.
pub const LOG_TARGET: &str = "ensure";

/// Environment variable holding the filter directives used by [`init`].
pub const FILTER_ENV: &str = "ENSURE_LOG";

/// Filter used by [`init`] when `ENSURE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter [`init`] installs.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a formatted stderr subscriber as the global default.
///
/// Returns `false` when a global subscriber is already installed; the
/// existing one keeps receiving the records.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
