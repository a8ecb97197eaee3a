//! Prefix-aware leveled logging with two sinks per logger: a colorful
//! stream for terminals and a plain structured stream for pipes and files.
//!
//! Every call writes the same logical record through both handles. The
//! colorful handle paints the bracketed name prefix and the message body,
//! the plain handle emits clean logfmt-style text or JSON lines, optionally
//! appended to a file. Three custom severities extend the builtin set:
//! `LOG`, `SUCCESS` and `FATAL` (which terminates the process).
//!
//! ```
//! use duolog::{attr, Config, Logger};
//!
//! let logger = Logger::new(Config {
//!     name: "server".into(),
//!     ..Config::default()
//! }).unwrap();
//! logger.info("listening", &[attr("port", 8080)]);
//! logger.success("startup complete", &[]);
//! ```
//!
//! A process-wide default logger backs the free functions of the same names
//! for code that does not want to thread a `Logger` through call sites.

mod attr;
mod config;
mod error;
mod handle;
mod level;
mod logger;
mod style;

pub use attr::{attr, Attr};
pub use config::{ArgStyle, Config};
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::Logger;
pub use style::{palette, Style};

use std::fmt::Display;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

// Bootstrap default: plain text to stdout, name "app". Replacement is not
// synchronized with in-flight calls; callers racing set_app_logger may still
// write through the old instance.
static APP_LOGGER: Lazy<RwLock<Arc<Logger>>> =
    Lazy::new(|| RwLock::new(Arc::new(Logger::default())));

/// Current process-wide default logger.
pub fn app_logger() -> Arc<Logger> {
    APP_LOGGER.read().clone()
}

/// Replaces the process-wide default logger wholesale.
pub fn set_app_logger(logger: Logger) {
    *APP_LOGGER.write() = Arc::new(logger);
}

pub fn debug(msg: impl Display, attrs: &[Attr]) {
    app_logger().debug(msg, attrs);
}

pub fn info(msg: impl Display, attrs: &[Attr]) {
    app_logger().info(msg, attrs);
}

pub fn error(msg: impl Display, attrs: &[Attr]) {
    app_logger().error(msg, attrs);
}

pub fn log(msg: impl Display, attrs: &[Attr]) {
    app_logger().log(msg, attrs);
}

pub fn success(msg: impl Display, attrs: &[Attr]) {
    app_logger().success(msg, attrs);
}

/// Logs through the default instance, then terminates the process.
pub fn fatal(msg: impl Display, attrs: &[Attr]) -> ! {
    app_logger().fatal(msg, attrs)
}
