//! Shared helpers for tripdag's integration tests.

pub mod builders;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Route the crate's `tracing` output into the test harness, once per binary.
///
/// Reads directives from `TRIPDAG_LOG` like the binary does, then `RUST_LOG`.
/// Without either, only tripdag's own warnings show up, which is where
/// rejected requests and ignored pins are reported. Output is captured per
/// test and printed for failures.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = std::env::var("TRIPDAG_LOG")
            .ok()
            .and_then(|s| EnvFilter::try_new(s).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("off,tripdag=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}
