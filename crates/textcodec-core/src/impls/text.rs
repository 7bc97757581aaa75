//! TEXT: canonical text is already the external form.

use crate::domain::{Format, TranslationError};
use crate::ports::Codec;

pub struct TextCodec;

impl Codec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn decode(&self, input: &str) -> Result<String, TranslationError> {
        Ok(input.to_string())
    }

    fn encode(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}
