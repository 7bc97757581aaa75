//! BINARY: every UTF-8 byte as eight ASCII bits, groups separated by a space.
//!
//! `"Hi"` encodes to `"01001000 01101001"`. Decoding accepts any whitespace
//! between groups.

use super::tokens::split_indexed;
use crate::domain::{Format, TranslationError};
use crate::ports::Codec;

const GROUP_BITS: usize = 8;

pub struct BinaryCodec;

impl BinaryCodec {
    fn parse_group(token: &str) -> Result<u8, String> {
        let len = token.chars().count();
        if len != GROUP_BITS {
            return Err(format!("expected {GROUP_BITS} bits, found {len}"));
        }
        token.chars().try_fold(0u8, |byte, c| match c {
            '0' => Ok(byte << 1),
            '1' => Ok(byte << 1 | 1),
            other => Err(format!("invalid bit character {other:?}")),
        })
    }
}

impl Codec for BinaryCodec {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn decode(&self, input: &str) -> Result<String, TranslationError> {
        let mut bytes = Vec::new();
        let mut positions = Vec::new();
        for (position, token) in split_indexed(input) {
            let byte = Self::parse_group(token)
                .map_err(|reason| TranslationError::malformed(Format::Binary, position, reason))?;
            bytes.push(byte);
            positions.push(position);
        }

        String::from_utf8(bytes).map_err(|err| {
            let bad = err.utf8_error().valid_up_to();
            let position = positions.get(bad).copied().unwrap_or(input.len());
            TranslationError::malformed(Format::Binary, position, "invalid UTF-8 sequence")
        })
    }

    fn encode(&self, text: &str) -> Result<String, TranslationError> {
        let mut out = String::with_capacity(text.len() * (GROUP_BITS + 1));
        for (i, byte) in text.bytes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:08b}"));
        }
        Ok(out)
    }
}
