//! Impls - one codec per format.
//!
//! Each codec is a unit struct; the statics below are the only instances the
//! dispatcher ever hands out (see `codec_for`).

pub mod binary;
pub mod morse;
pub mod text;
mod tokens;

pub use self::binary::BinaryCodec;
pub use self::morse::MorseCodec;
pub use self::text::TextCodec;

use crate::domain::Format;
use crate::ports::Codec;

pub static TEXT: TextCodec = TextCodec;
pub static BINARY: BinaryCodec = BinaryCodec;
pub static MORSE: MorseCodec = MorseCodec;

/// The process-wide codec for `format`.
pub fn codec_for(format: Format) -> &'static dyn Codec {
    match format {
        Format::Text => &TEXT,
        Format::Binary => &BINARY,
        Format::Morse => &MORSE,
    }
}

/// Whether `decode(encode(text)) == text` holds for `format`.
///
/// MORSE folds case, so only upper-case text made of table characters
/// survives unchanged.
pub fn round_trips(format: Format, text: &str) -> bool {
    match format {
        Format::Text | Format::Binary => true,
        Format::Morse => text
            .chars()
            .all(|c| c == ' ' || (!c.is_ascii_lowercase() && morse::lookup(c).is_some())),
    }
}
