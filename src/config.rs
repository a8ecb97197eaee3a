use std::io::Write;
use std::path::PathBuf;

use crate::level::Level;
use crate::style::Style;

/// How the variadic arguments of a logging call are handled.
///
/// The strategy is picked once at construction and applies to every call on
/// the logger; the write path never branches on anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgStyle {
    /// Arguments are forwarded to the backend as key/value attributes.
    #[default]
    Structured,
    /// Argument values are substituted into `{}` placeholders in the
    /// message, in order; the backend receives a fully formed string.
    Positional,
}

/// Logger configuration. Immutable after construction.
///
/// Every field has a documented default, so partial configurations are
/// spelled with struct update syntax:
///
/// ```
/// use duolog::{Config, Logger, Style};
///
/// let logger = Logger::new(Config {
///     name: "worker".into(),
///     prefix_color: Style::fixed(61),
///     ..Config::default()
/// }).unwrap();
/// logger.info("ready", &[]);
/// ```
pub struct Config {
    /// Routes the primary destination to the colorful group when set,
    /// otherwise to the plain group.
    pub enable_colors: bool,
    /// Bracketed prefix rendered before every message. Empty disables the
    /// prefix entirely.
    pub name: String,
    /// Primary destination. `None` means the process's standard output.
    pub stdout: Option<Box<dyn Write + Send>>,
    /// Additional durable plain-text destination, opened in append mode and
    /// created if missing. Never colorized.
    pub path: Option<PathBuf>,
    /// Style for the bracketed name prefix on the colorful sink.
    pub prefix_color: Style,
    /// JSON lines instead of logfmt-style text, on both sinks.
    pub output_json: bool,
    /// Minimum level emitted, shared by both sinks.
    pub level: Level,
    pub arg_style: ArgStyle,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            enable_colors: false,
            name: "app".to_string(),
            stdout: None,
            path: None,
            prefix_color: Style::none(),
            output_json: false,
            level: Level::ALL,
            arg_style: ArgStyle::Structured,
        }
    }
}
