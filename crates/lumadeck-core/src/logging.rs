//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so every log line goes to a daily
//! rolling file under `<data_local_dir>/lumadeck/logs/`.

use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding the filter directives
pub const LOG_ENV_VAR: &str = "LUMADECK_LOG";

/// Info for the lumadeck crates, warn for dependencies
const DEFAULT_FILTER: &str = "lumadeck=info,warn";

/// File name prefix; the appender adds the date
const LOG_FILE_PREFIX: &str = "lumadeck.log";

/// Initialize the logging subsystem
///
/// ```bash
/// LUMADECK_LOG=debug lumadeck
/// LUMADECK_LOG=lumadeck_gateway=trace lumadeck --list
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(
        "Lumadeck {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    Ok(())
}

/// Directory the log files are written to
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lumadeck")
        .join("logs")
}
