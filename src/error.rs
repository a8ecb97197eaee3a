use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for logger construction.
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors raised while building a [`Logger`](crate::Logger).
///
/// Only construction can fail. Once a logger exists, write failures on its
/// destinations are swallowed: logging never raises errors back to the code
/// doing the logging.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The configured log file could not be created or opened. A logger that
    /// cannot reach its durable sink is a misconfiguration, so this aborts
    /// startup rather than being retried.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
