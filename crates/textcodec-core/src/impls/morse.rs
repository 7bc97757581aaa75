//! MORSE: International Morse code over the ITU character set.
//!
//! # Layout
//! - letters inside a word: one space (`"... --- ..."`)
//! - words: `" / "` (`"SOS SOS"` -> `"... --- ... / ... --- ..."`)
//!
//! Decoding also accepts the older convention of a gap between words: any run
//! of three or more spaces is one word break, but only when the input
//! contains no `/` at all.

use super::tokens::{offset_of, split_indexed};
use crate::domain::{Format, TranslationError};
use crate::ports::Codec;

const WORD_SEPARATOR: &str = " / ";
const WORD_GAP_MIN: usize = 3;

/// The bidirectional table. Every sequence appears exactly once.
const TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// Morse sequence for `c`, case-insensitively.
pub fn lookup(c: char) -> Option<&'static str> {
    let c = c.to_ascii_uppercase();
    TABLE
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, code)| *code)
}

/// Character for a dot-dash sequence.
pub fn reverse_lookup(code: &str) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, seq)| *seq == code)
        .map(|(ch, _)| *ch)
}

pub struct MorseCodec;

impl MorseCodec {
    /// Splits `input` into word slices, each still a subslice of `input`.
    fn words(input: &str) -> Vec<&str> {
        if input.contains('/') {
            return input.split('/').collect();
        }

        let bytes = input.as_bytes();
        let mut words = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b' ' {
                i += 1;
                continue;
            }
            let run_end = bytes[i..]
                .iter()
                .position(|b| *b != b' ')
                .map_or(bytes.len(), |n| i + n);
            if run_end - i >= WORD_GAP_MIN {
                words.push(&input[start..i]);
                start = run_end;
            }
            i = run_end;
        }
        words.push(&input[start..]);
        words
    }

    fn decode_token(position: usize, token: &str) -> Result<char, TranslationError> {
        if let Some(bad) = token.chars().find(|c| *c != '.' && *c != '-') {
            return Err(TranslationError::malformed(
                Format::Morse,
                position,
                format!("invalid morse symbol {bad:?} in {token:?}"),
            ));
        }
        reverse_lookup(token).ok_or_else(|| {
            TranslationError::malformed(
                Format::Morse,
                position,
                format!("unknown morse sequence {token:?}"),
            )
        })
    }
}

impl Codec for MorseCodec {
    fn format(&self) -> Format {
        Format::Morse
    }

    fn decode(&self, input: &str) -> Result<String, TranslationError> {
        let mut out = String::with_capacity(input.len() / 2);
        for (i, word) in Self::words(input).into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let base = offset_of(input, word);
            for (offset, token) in split_indexed(word) {
                out.push(Self::decode_token(base + offset, token)?);
            }
        }
        Ok(out)
    }

    fn encode(&self, text: &str) -> Result<String, TranslationError> {
        let mut words = Vec::new();
        for word in text.split(' ') {
            let letters = word
                .chars()
                .map(|c| {
                    lookup(c).ok_or(TranslationError::UnsupportedCharacter {
                        ch: c,
                        format: Format::Morse,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            words.push(letters.join(" "));
        }
        Ok(words.join(WORD_SEPARATOR))
    }
}
