//! Process-wide logging initialization.

use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;

static INIT: OnceCell<()> = OnceCell::new();

/// Resolve a severity name to a level.
///
/// Lookup is case-insensitive and tolerates the long aliases (`WARNING`,
/// `CRITICAL`). Unknown names resolve to INFO rather than erroring.
pub fn resolve_level(name: &str) -> Level {
    match name.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" | "CRITICAL" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Configure the process-wide logging sink.
///
/// The emitted format carries timestamp, severity, target, and message.
/// `RUST_LOG` takes precedence when set; otherwise the level comes from the
/// settings snapshot. Only the first call installs the subscriber; later
/// calls are no-ops.
pub fn init(settings: &Settings) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(resolve_level(&settings.log_level).to_string()));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init();
    });
}
