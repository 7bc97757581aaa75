//! textcodec-core
//!
//! Converts text between named encodings by decoding into canonical text and
//! encoding back out.
//!
//! # Modules
//! - **domain**: format tags, errors, translation records
//! - **ports**: the `Codec` trait
//! - **impls**: TEXT, BINARY and MORSE codecs
//! - **app**: the dispatcher (`translate`, `Translator`)
//!
//! The crate does no I/O and never logs; reporting is the caller's job.

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Translator, translate, translate_formats};
pub use domain::{ErrorKind, Format, Translation, TranslationError};
pub use ports::Codec;
