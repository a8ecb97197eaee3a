use std::borrow::Cow;

use nu_ansi_term::Color;

/// 256-color palette codes used by the colorful sink.
pub mod palette {
    /// Muted grey used for message bodies.
    pub const TEXT: u8 = 245;
    pub const DEBUG: u8 = 3;
    pub const SUCCESS: u8 = 2;
    pub const ERROR: u8 = 1;
    pub const LOG: u8 = 61;
}

/// An opaque rendering style: either a fixed 256-color ANSI wrap or a no-op.
///
/// The logger never hard-codes escape sequences; everything colored goes
/// through [`Style::paint`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    color: Option<u8>,
}

impl Style {
    /// A style that leaves text unchanged.
    pub const fn none() -> Style {
        Style { color: None }
    }

    /// A style painting text with the given 256-color palette code.
    pub const fn fixed(code: u8) -> Style {
        Style { color: Some(code) }
    }

    pub fn paint<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.color {
            Some(code) => Cow::Owned(Color::Fixed(code).paint(text).to_string()),
            None => Cow::Borrowed(text),
        }
    }
}
