//! Format tags: the closed set of encodings the dispatcher understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::TranslationError;

/// A named encoding.
///
/// Serialized as the upper-case tag (`TEXT`, `BINARY`, `MORSE`), which is also
/// the only spelling `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Format {
    Text,
    Binary,
    Morse,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Text, Format::Binary, Format::Morse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "TEXT",
            Format::Binary => "BINARY",
            Format::Morse => "MORSE",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| TranslationError::InvalidFormat(s.to_string()))
    }
}
