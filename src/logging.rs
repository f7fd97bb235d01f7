//! Tracing setup
//!
//! Logs go to stderr so snapshots printed on stdout stay machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Safe to call repeatedly;
/// only the first call has an effect.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber installed by an embedding application takes precedence.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing("budget_setup=debug");
        super::init_tracing("not a [valid filter");
    }
}
