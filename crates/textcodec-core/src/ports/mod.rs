//! Ports: the seam between the dispatcher and the per-format codecs.

pub mod codec;

pub use self::codec::Codec;
