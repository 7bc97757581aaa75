//! Dispatcher: source codec decodes, destination codec encodes.
//!
//! Canonical text is the pivot, so any pair of formats works without a
//! dedicated converter (`MORSE -> BINARY` is `decode_morse` then
//! `encode_binary`).

use crate::domain::{Format, Translation, TranslationError};
use crate::impls::codec_for;

/// Parse the source tag, decode, parse the destination tag, encode.
fn dispatch(
    input: &str,
    source: &str,
    destination: &str,
) -> Result<(Format, Format, String), TranslationError> {
    let source: Format = source.parse()?;
    let canonical = codec_for(source).decode(input)?;
    let destination: Format = destination.parse()?;
    let output = codec_for(destination).encode(&canonical)?;
    Ok((source, destination, output))
}

/// Translate `input` between two tags given as strings.
///
/// Checks happen in call order: the source tag, then decoding, then the
/// destination tag, then encoding. The first failure is returned as is.
///
/// ```
/// use textcodec_core::translate;
///
/// assert_eq!(translate("SOS", "TEXT", "MORSE").unwrap(), "... --- ...");
/// ```
pub fn translate(input: &str, source: &str, destination: &str) -> Result<String, TranslationError> {
    dispatch(input, source, destination).map(|(_, _, output)| output)
}

/// Same as [`translate`] with tags already parsed.
pub fn translate_formats(
    input: &str,
    source: Format,
    destination: Format,
) -> Result<String, TranslationError> {
    let canonical = codec_for(source).decode(input)?;
    codec_for(destination).encode(&canonical)
}

/// Handle over the dispatcher.
///
/// Holds nothing; it exists so embedders can pass "the translator" around and
/// so `run` has somewhere to live.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator;

impl Translator {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(
        &self,
        input: &str,
        source: &str,
        destination: &str,
    ) -> Result<String, TranslationError> {
        translate(input, source, destination)
    }

    /// Translate and keep the whole record.
    pub fn run(
        &self,
        input: &str,
        source: &str,
        destination: &str,
    ) -> Result<Translation, TranslationError> {
        let (source, destination, output) = dispatch(input, source, destination)?;
        Ok(Translation {
            source,
            destination,
            input: input.to_string(),
            output,
        })
    }
}
