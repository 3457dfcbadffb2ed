//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the mapcycle tracing/logging system.
///
/// Reads `MAPCYCLE_LOG` for filter directives, e.g.
/// `MAPCYCLE_LOG=mapcycle_engine=debug,mapcycle_core=warn`.
///
/// Falls back to `mapcycle_core=info,mapcycle_engine=info` if `MAPCYCLE_LOG`
/// is not set or is invalid. Safe to call more than once; only the first
/// call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("mapcycle_core=info,mapcycle_engine=info"));

        // A host may already own the global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
