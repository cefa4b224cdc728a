//! Shared helpers for `linestamp` tests.
//!
//! - [`fakes`] holds scripted stand-ins for the channel, the log sink and
//!   the clock.

pub mod fakes;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a per-test tracing subscriber, once per test binary.
///
/// Output is captured by the harness and only shown for failing tests.
/// The filter comes from `RUST_LOG` (e.g. `RUST_LOG=linestamp=trace`),
/// defaulting to `linestamp=info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("linestamp=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
