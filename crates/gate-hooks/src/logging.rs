// Rust guideline compliant 2026-10-19

//! Logging setup for the Gate binaries.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Installs a stderr `fmt` subscriber at the given level.
///
/// Stdout is left to the wrapped tools. Installing twice is harmless; the
/// first subscriber wins.
///
/// # Errors
///
/// Returns an error if `level` is not a known log level.
pub fn init_tracing(level: &str) -> Result<(), LoggingError> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a case-insensitive log level name.
///
/// # Errors
///
/// Returns an error if `level` is not a known log level.
pub fn parse_log_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(LoggingError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert!(matches!(
            parse_log_level("loud"),
            Err(LoggingError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_every_config_level_parses() {
        for level in gate_core::config::LOG_LEVELS {
            assert!(parse_log_level(level).is_ok(), "{level} should parse");
        }
    }
}
