//! Errors returned by the dispatcher and the codecs.
//!
//! All of them are validation failures: the same call with the same input
//! fails the same way, so nothing here is retryable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::Format;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The requested tag is not one of TEXT, BINARY, MORSE.
    #[error("invalid format '{0}'")]
    InvalidFormat(String),

    /// The input claims to be in `format` but violates its grammar.
    /// `position` is a byte offset into the input.
    #[error("malformed {format} input at byte {position}: {reason}")]
    MalformedInput {
        format: Format,
        position: usize,
        reason: String,
    },

    /// The canonical text holds a character `format` cannot represent.
    #[error("character {ch:?} cannot be encoded as {format}")]
    UnsupportedCharacter { ch: char, format: Format },
}

/// Coarse classification of a [`TranslationError`], stable enough to put on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidFormat,
    MalformedInput,
    UnsupportedCharacter,
}

impl TranslationError {
    pub fn malformed(format: Format, position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            format,
            position,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::UnsupportedCharacter { .. } => ErrorKind::UnsupportedCharacter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let err = TranslationError::InvalidFormat("FOO".into());
        assert_eq!(err.to_string(), "invalid format 'FOO'");

        let err = TranslationError::malformed(Format::Binary, 9, "expected 8 bits, found 4");
        assert_eq!(
            err.to_string(),
            "malformed BINARY input at byte 9: expected 8 bits, found 4"
        );

        let err = TranslationError::UnsupportedCharacter {
            ch: '#',
            format: Format::Morse,
        };
        assert_eq!(err.to_string(), "character '#' cannot be encoded as MORSE");
    }

    #[test]
    fn kind_serializes_screaming_snake() {
        let err = TranslationError::UnsupportedCharacter {
            ch: '~',
            format: Format::Morse,
        };
        let json = serde_json::to_string(&err.kind()).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_CHARACTER\"");
    }
}
