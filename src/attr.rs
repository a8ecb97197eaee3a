use serde_json::Value;

/// A structured key/value attribute attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

/// Builds an [`Attr`] from anything serde_json can represent.
///
/// ```
/// use duolog::attr;
/// let a = attr("port", 8080);
/// assert_eq!(a.key, "port");
/// ```
pub fn attr(key: impl Into<String>, value: impl Into<Value>) -> Attr {
    Attr {
        key: key.into(),
        value: value.into(),
    }
}

impl Attr {
    /// Renders the value the way a human would write it: strings bare,
    /// everything else as JSON.
    pub(crate) fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
