// nexus-flags/src/error.rs

//! Error types for parsing bitfields from text.

use core::fmt;

/// What went wrong while parsing a bitfield from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input was empty.
    Empty,
    /// Input contained a character that is not a digit in the radix.
    InvalidDigit,
}

/// Text could not be parsed into a bitfield value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBitsError {
    kind: ParseErrorKind,
}

impl ParseBitsError {
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// The failure kind.
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseBitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => f.write_str("cannot parse bitfield from empty string"),
            ParseErrorKind::InvalidDigit => f.write_str("invalid digit found in string"),
        }
    }
}

impl core::error::Error for ParseBitsError {}
