//! App - the dispatcher that ties formats to codecs.

pub mod dispatch;

pub use self::dispatch::{Translator, translate, translate_formats};
