//! Domain model: format tags, errors, translation records.

pub mod errors;
pub mod format;
pub mod translation;

pub use self::errors::{ErrorKind, TranslationError};
pub use self::format::Format;
pub use self::translation::Translation;
