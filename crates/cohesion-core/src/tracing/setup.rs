//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the cohesion tracing/logging system.
///
/// Reads `COHESION_LOG` for per-module log levels, e.g.
/// `COHESION_LOG=cohesion_analysis::engine=debug,cohesion_analysis::parsers=trace`.
/// Falls back to `warn` if `COHESION_LOG` is unset or invalid.
///
/// Events go to stderr so stdout carries only the report. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("COHESION_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
