//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "GOVLENS_LOG";

/// Filter used when `GOVLENS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "govlens=info";

/// Initialize the govlens tracing/logging system.
///
/// Reads `GOVLENS_LOG` for per-subsystem log levels.
/// Format: `GOVLENS_LOG=govlens_analysis::inversion=debug,govlens_core=info`
///
/// Falls back to `govlens=info` if `GOVLENS_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
