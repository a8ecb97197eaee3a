use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::attr::Attr;
use crate::config::{ArgStyle, Config};
use crate::error::{LoggerError, Result};
use crate::handle::{Encoding, Handle};
use crate::level::Level;
use crate::style::{palette, Style};

/// Grace period before [`Logger::fatal`] terminates the process, giving
/// buffered destinations a chance to drain. A heuristic, not a guarantee.
const FATAL_FLUSH_DELAY: Duration = Duration::from_secs(1);

/// A prefix-aware leveled logger writing every record through two handles:
/// a colorful one for terminals and a plain one for pipes and files.
///
/// Both handles share the level threshold and the encoding; they differ only
/// in destinations and in whether the prefix and message body are painted.
/// Which handle receives the primary destination is decided by
/// [`Config::enable_colors`], so colorized output never reaches a
/// destination that asked for plain text.
pub struct Logger {
    colorful: Handle,
    plain: Handle,
    name: String,
    prefix_color: Style,
    text_color: Style,
    arg_style: ArgStyle,
}

impl Logger {
    /// Builds a logger from a configuration.
    ///
    /// The only failure mode is the configured log file being unopenable,
    /// which is treated as a startup misconfiguration and returned as
    /// [`LoggerError::LogFile`] rather than being retried or ignored.
    pub fn new(config: Config) -> Result<Logger> {
        let file = match &config.path {
            Some(path) => Some(open_log_file(path)?),
            None => None,
        };
        Ok(Logger::build(config, file))
    }

    /// Convenience constructor: a named logger with a fixed prefix color and
    /// no file destination. Cannot fail.
    pub fn with_name(name: impl Into<String>, color_code: u8) -> Logger {
        Logger::build(
            Config {
                name: name.into(),
                prefix_color: Style::fixed(color_code),
                ..Config::default()
            },
            None,
        )
    }

    fn build(config: Config, file: Option<File>) -> Logger {
        let Config {
            enable_colors,
            name,
            stdout,
            path: _,
            prefix_color,
            output_json,
            level,
            arg_style,
        } = config;

        let primary: Box<dyn Write + Send> =
            stdout.unwrap_or_else(|| Box::new(io::stdout()));

        let mut colorful_group: Vec<Box<dyn Write + Send>> = Vec::new();
        let mut plain_group: Vec<Box<dyn Write + Send>> = Vec::new();
        if enable_colors {
            colorful_group.push(primary);
        } else {
            plain_group.push(primary);
        }
        // File output is never colorized, whatever enable_colors says.
        if let Some(file) = file {
            plain_group.push(Box::new(file));
        }

        let encoding = if output_json {
            Encoding::Json
        } else {
            Encoding::Text
        };

        Logger {
            colorful: Handle::new(colorful_group, level, encoding),
            plain: Handle::new(plain_group, level, encoding),
            name,
            prefix_color,
            text_color: Style::fixed(palette::TEXT),
            arg_style,
        }
    }

    pub fn debug(&self, msg: impl Display, attrs: &[Attr]) {
        self.write(Level::DEBUG, &msg.to_string(), attrs);
    }

    pub fn info(&self, msg: impl Display, attrs: &[Attr]) {
        self.write(Level::INFO, &msg.to_string(), attrs);
    }

    pub fn error(&self, msg: impl Display, attrs: &[Attr]) {
        self.write(Level::ERROR, &msg.to_string(), attrs);
    }

    /// Plain status line, one notch above `info`.
    pub fn log(&self, msg: impl Display, attrs: &[Attr]) {
        self.write(Level::LOG, &msg.to_string(), attrs);
    }

    pub fn success(&self, msg: impl Display, attrs: &[Attr]) {
        self.write(Level::SUCCESS, &msg.to_string(), attrs);
    }

    /// Debug-level write without the name prefix on either sink.
    pub fn print(&self, msg: impl Display, attrs: &[Attr]) {
        self.dispatch(Level::DEBUG, &msg.to_string(), attrs, false);
    }

    /// Logs at the `FATAL` level on both sinks, waits out the flush grace
    /// period and terminates the process with a non-zero exit code.
    pub fn fatal(&self, msg: impl Display, attrs: &[Attr]) -> ! {
        self.write(Level::FATAL, &msg.to_string(), attrs);
        thread::sleep(FATAL_FLUSH_DELAY);
        std::process::exit(1);
    }

    fn write(&self, level: Level, msg: &str, attrs: &[Attr]) {
        self.dispatch(level, msg, attrs, true);
    }

    fn dispatch(&self, level: Level, msg: &str, attrs: &[Attr], with_prefix: bool) {
        let colorful_prefix = if with_prefix {
            self.colorful_prefix()
        } else {
            String::new()
        };
        let plain_prefix = if with_prefix {
            self.plain_prefix()
        } else {
            String::new()
        };
        match self.arg_style {
            ArgStyle::Positional => {
                let body = substitute(msg, attrs);
                self.colorful.log(
                    level,
                    &format!("{}{}", colorful_prefix, self.text_color.paint(&body)),
                    &[],
                );
                self.plain
                    .log(level, &format!("{}{}", plain_prefix, body), &[]);
            }
            ArgStyle::Structured => {
                self.colorful.log(
                    level,
                    &format!("{}{}", colorful_prefix, self.text_color.paint(msg)),
                    attrs,
                );
                self.plain
                    .log(level, &format!("{}{}", plain_prefix, msg), attrs);
            }
        }
    }

    fn colorful_prefix(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        let bracketed = format!("[{}]", self.name);
        format!("{} ", self.prefix_color.paint(&bracketed))
    }

    fn plain_prefix(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        format!("[{}] ", self.name)
    }
}

impl Default for Logger {
    /// The bootstrap logger: default configuration, plain text to the
    /// process's standard output.
    fn default() -> Logger {
        Logger::build(Config::default(), None)
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    let file_error = |source: std::io::Error| LoggerError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(file_error)?;
        }
    }
    OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(file_error)
}

/// Substitutes attribute values into `{}` placeholders in order. Surplus
/// placeholders stay verbatim, surplus values are ignored.
fn substitute(template: &str, args: &[Attr]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = args.iter();
    let mut rest = template;
    while let Some(i) = rest.find("{}") {
        out.push_str(&rest[..i]);
        match values.next() {
            Some(arg) => out.push_str(&arg.display_value()),
            None => out.push_str("{}"),
        }
        rest = &rest[i + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attr;

    #[test]
    fn substitute_fills_placeholders_in_order() {
        let out = substitute(
            "{} of {} done",
            &[attr("done", 3), attr("total", 10)],
        );
        assert_eq!(out, "3 of 10 done");
    }

    #[test]
    fn substitute_keeps_surplus_placeholders() {
        assert_eq!(substitute("{} and {}", &[attr("a", 1)]), "1 and {}");
    }

    #[test]
    fn substitute_ignores_surplus_values() {
        assert_eq!(
            substitute("plain", &[attr("unused", true)]),
            "plain"
        );
    }

    #[test]
    fn prefixes_are_empty_without_a_name() {
        let logger = Logger::build(
            Config {
                name: String::new(),
                ..Config::default()
            },
            None,
        );
        assert_eq!(logger.colorful_prefix(), "");
        assert_eq!(logger.plain_prefix(), "");
    }

    #[test]
    fn colorful_prefix_paints_the_bracketed_name() {
        let logger = Logger::build(
            Config {
                name: "api".to_string(),
                prefix_color: Style::fixed(palette::LOG),
                ..Config::default()
            },
            None,
        );
        let prefix = logger.colorful_prefix();
        assert!(prefix.contains("[api]"));
        assert!(prefix.contains('\u{1b}'));
        assert_eq!(logger.plain_prefix(), "[api] ");
    }
}
