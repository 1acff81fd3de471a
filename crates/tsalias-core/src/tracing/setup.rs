//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tsalias tracing/logging system.
///
/// Reads the `TSALIAS_LOG` environment variable for per-module log levels,
/// e.g. `TSALIAS_LOG=tsalias_core::rewriter=debug`.
///
/// Falls back to `tsalias=info` if `TSALIAS_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TSALIAS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("tsalias=info,tsalias_core=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
