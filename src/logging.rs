//! Logger bootstrap for the command-line front end.
//!
//! The library only talks to the `log` facade. A binary that wants to see the
//! per-line rejection reports calls [`init_logging`] once and keeps the returned
//! handle alive for as long as it logs.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::debug;

/// Level used when none is given: warnings carry the rejected-line reports.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected off|error|warn|info|debug|trace")]
    UnsupportedLevel(String),

    #[error("failed to start logger: {0}")]
    Start(#[from] FlexiLoggerError),
}

/// Starts a stderr logger at `level`. `RUST_LOG`, when set, takes precedence.
///
/// # Errors
/// Returns an error when `level` is not a known level name or the backend fails to
/// start (for instance because a logger is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle, LoggingError> {
    let level = normalize_level(level)?;
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format_for_stderr(flexi_logger::default_format)
        .start()?;
    debug!("logging initialized at level {level}");
    Ok(handle)
}

/// Maps user spellings onto the level names the logger accepts.
pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(LoggingError::UnsupportedLevel(other.to_owned())),
    }
}
