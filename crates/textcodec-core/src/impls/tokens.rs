//! Whitespace tokenizer that remembers where each token started.

/// Splits `input` on whitespace, yielding `(byte_offset, token)` pairs.
pub(crate) fn split_indexed(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .split_whitespace()
        .map(move |token| (offset_of(input, token), token))
}

/// Byte offset of `part` within `whole`. `part` must be a subslice of `whole`.
pub(crate) fn offset_of(whole: &str, part: &str) -> usize {
    part.as_ptr() as usize - whole.as_ptr() as usize
}
