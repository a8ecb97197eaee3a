use std::io::Write;

use chrono::{Local, SecondsFormat};
use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::attr::Attr;
use crate::level::Level;

/// Record encoding applied before a line reaches the destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Text,
    Json,
}

/// A leveled log handle over a fan-out of destinations.
///
/// The handle owns level filtering, level-label substitution and encoding;
/// the façade on top of it only decides prefixes and message text. An empty
/// destination group is legal and simply discards output.
pub(crate) struct Handle {
    writers: Mutex<Vec<Box<dyn Write + Send>>>,
    min_level: Level,
    encoding: Encoding,
}

impl Handle {
    pub(crate) fn new(
        writers: Vec<Box<dyn Write + Send>>,
        min_level: Level,
        encoding: Encoding,
    ) -> Handle {
        Handle {
            writers: Mutex::new(writers),
            min_level,
            encoding,
        }
    }

    /// Encodes one record and writes it to every destination. Write errors
    /// are swallowed: logging never surfaces I/O failures to callers.
    pub(crate) fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        if level < self.min_level {
            return;
        }
        let line = match self.encoding {
            Encoding::Text => encode_text(level, msg, attrs),
            Encoding::Json => encode_json(level, msg, attrs),
        };
        let mut writers = self.writers.lock();
        for writer in writers.iter_mut() {
            let _ = writer.write_all(line.as_bytes());
            let _ = writer.flush();
        }
    }
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

fn encode_text(level: Level, msg: &str, attrs: &[Attr]) -> String {
    let mut line = format!(
        "time={} level={} msg={}",
        timestamp(),
        level.label(),
        quote(msg)
    );
    for attr in attrs {
        line.push(' ');
        line.push_str(&attr.key);
        line.push('=');
        line.push_str(&quote(&attr.display_value()));
    }
    line.push('\n');
    line
}

fn encode_json(level: Level, msg: &str, attrs: &[Attr]) -> String {
    let mut record = Map::new();
    record.insert("time".to_string(), Value::String(timestamp()));
    record.insert("level".to_string(), Value::String(level.label()));
    record.insert("msg".to_string(), Value::String(msg.to_string()));
    for attr in attrs {
        record.insert(attr.key.clone(), attr.value.clone());
    }
    let mut line = Value::Object(record).to_string();
    line.push('\n');
    line
}

/// Quotes a text-format value when it would be ambiguous unquoted. ANSI
/// escape bytes are passed through untouched so colorized lines still render
/// on a terminal.
fn quote(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '=' || c == '"' || c == '\n');
    if !needs_quoting {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::attr;

    #[test]
    fn text_encoding_substitutes_custom_level_labels() {
        let line = encode_text(Level::SUCCESS, "done", &[]);
        assert!(line.contains("level=SUCCESS"));
        assert!(line.contains("msg=done"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn text_encoding_quotes_messages_with_spaces() {
        let line = encode_text(Level::INFO, "two words", &[]);
        assert!(line.contains("msg=\"two words\""));
    }

    #[test]
    fn text_encoding_appends_attributes() {
        let line = encode_text(Level::INFO, "listening", &[attr("port", 8080)]);
        assert!(line.contains("port=8080"));
    }

    #[test]
    fn json_encoding_produces_one_object_per_line() {
        let line = encode_json(Level::FATAL, "bye", &[attr("code", 2)]);
        let record: Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(record["level"], "FATAL");
        assert_eq!(record["msg"], "bye");
        assert_eq!(record["code"], 2);
    }

    #[derive(Clone, Default)]
    struct SharedBuf(std::sync::Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_below_the_threshold_are_dropped() {
        let buf = SharedBuf::default();
        let handle = Handle::new(vec![Box::new(buf.clone())], Level::WARN, Encoding::Text);
        handle.log(Level::DEBUG, "quiet", &[]);
        handle.log(Level::ERROR, "loud", &[]);
        let output = String::from_utf8(buf.0.lock().clone()).unwrap();
        assert!(!output.contains("quiet"));
        assert!(output.contains("loud"));
    }

    #[test]
    fn every_destination_receives_the_record() {
        let first = SharedBuf::default();
        let second = SharedBuf::default();
        let handle = Handle::new(
            vec![Box::new(first.clone()), Box::new(second.clone())],
            Level::ALL,
            Encoding::Text,
        );
        handle.log(Level::INFO, "fanout", &[]);
        assert!(String::from_utf8(first.0.lock().clone()).unwrap().contains("fanout"));
        assert!(String::from_utf8(second.0.lock().clone()).unwrap().contains("fanout"));
    }
}
