//! Codec port: one decode/encode pair per format.

use crate::domain::{Format, TranslationError};

/// A codec converts between its external format and canonical text.
///
/// # Contract
/// - `decode`: external format -> canonical text. Input that violates the
///   format's grammar fails with `MalformedInput`.
/// - `encode`: canonical text -> external format. Characters the format cannot
///   represent fail with `UnsupportedCharacter`.
///
/// Implementations hold no state, so a single `static` instance serves every
/// caller on every thread.
pub trait Codec: Send + Sync {
    fn format(&self) -> Format;

    fn decode(&self, input: &str) -> Result<String, TranslationError>;

    fn encode(&self, text: &str) -> Result<String, TranslationError>;
}
