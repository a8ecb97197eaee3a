use std::fmt;

/// Severity of a log record, ordered by numeric priority.
///
/// The numbering leaves gaps between the builtin severities so that custom
/// levels can slot in between them: `LOG` and `SUCCESS` sit between `INFO`
/// and `WARN`, `FATAL` sits above `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(pub i8);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    /// Plain status lines, slightly above `INFO`.
    pub const LOG: Level = Level(1);
    /// Positive completion notices, above `LOG`.
    pub const SUCCESS: Level = Level(2);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);
    /// Highest severity; logging at this level terminates the process.
    pub const FATAL: Level = Level(12);

    /// Threshold below every level, including `DEBUG`. Using it as a
    /// logger's minimum level admits every record.
    pub const ALL: Level = Level(-10);

    /// Label registered for the custom levels. The mapping is fixed at
    /// compile time; builtin levels return `None` and render through
    /// [`Level::label`] instead.
    pub fn custom_label(self) -> Option<&'static str> {
        match self {
            Level::LOG => Some("LOG"),
            Level::SUCCESS => Some("SUCCESS"),
            Level::FATAL => Some("FATAL"),
            _ => None,
        }
    }

    /// Display label for any level: the registered custom label, a builtin
    /// name, or a builtin name with a numeric offset (`"INFO+3"`) for
    /// levels that have neither.
    pub fn label(self) -> String {
        if let Some(custom) = self.custom_label() {
            return custom.to_string();
        }
        let (base, name) = if self.0 < Level::INFO.0 {
            (Level::DEBUG.0, "DEBUG")
        } else if self.0 < Level::WARN.0 {
            (Level::INFO.0, "INFO")
        } else if self.0 < Level::ERROR.0 {
            (Level::WARN.0, "WARN")
        } else {
            (Level::ERROR.0, "ERROR")
        };
        let delta = i16::from(self.0) - i16::from(base);
        if delta == 0 {
            name.to_string()
        } else if delta > 0 {
            format!("{}+{}", name, delta)
        } else {
            format!("{}{}", name, delta)
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_levels_have_registered_labels() {
        assert_eq!(Level::LOG.label(), "LOG");
        assert_eq!(Level::SUCCESS.label(), "SUCCESS");
        assert_eq!(Level::FATAL.label(), "FATAL");
    }

    #[test]
    fn builtin_levels_render_their_names() {
        assert_eq!(Level::DEBUG.label(), "DEBUG");
        assert_eq!(Level::INFO.label(), "INFO");
        assert_eq!(Level::WARN.label(), "WARN");
        assert_eq!(Level::ERROR.label(), "ERROR");
    }

    #[test]
    fn unknown_levels_fall_back_to_numeric_offsets() {
        assert_eq!(Level(3).label(), "INFO+3");
        assert_eq!(Level(-2).label(), "DEBUG+2");
        assert_eq!(Level(-6).label(), "DEBUG-2");
        assert_eq!(Level(9).label(), "ERROR+1");
    }

    #[test]
    fn levels_order_by_priority() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::LOG);
        assert!(Level::LOG < Level::SUCCESS);
        assert!(Level::SUCCESS < Level::WARN);
        assert!(Level::ERROR < Level::FATAL);
        assert!(Level::ALL < Level::DEBUG);
    }
}
