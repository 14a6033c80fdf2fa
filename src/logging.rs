//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `MOTIF_LOG=motif_search_rs=debug`
pub const LOG_ENV: &str = "MOTIF_LOG";

/// Installs a formatted tracing subscriber filtered by `MOTIF_LOG`.
///
/// Falls back to `motif_search_rs=info` if the variable is unset or invalid.
/// Only the first call has any effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("motif_search_rs=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
