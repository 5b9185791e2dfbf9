//! Process-wide `tracing` subscriber setup.

use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs the fmt subscriber, filtered by `RUST_LOG` and defaulting to `info`.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn register_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let log_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(log_filter)
            .with_ansi(std::io::stderr().is_terminal())
            .init();
    });
}
