// ## 📂 File: `src/detect/trim.rs`

//! detect/trim.rs
//! Detection and marker removal over in-memory buffers.

use bytes::Bytes;

use crate::detect::view::ByteView;
use crate::encoding::{lookup, Encoding};

/// Detect the encoding announced by the leading bytes of `input`.
///
/// Accepts anything that views as bytes: `str`, `[u8]`, `String`, `Vec<u8>`,
/// arrays, `Bytes`, or caller newtypes implementing `AsRef<[u8]>`.
#[inline]
pub fn detect_encoding<T: AsRef<[u8]> + ?Sized>(input: &T) -> Encoding {
    lookup(input.as_ref())
}

/// Remove a leading marker, returning the remainder and the detected encoding.
///
/// # Returns
/// - `(suffix, enc)` when a marker was found.
/// - `(input, Encoding::Unspecified)` otherwise.
pub fn trim<T: ByteView + ?Sized>(input: &T) -> (&T, Encoding) {
    let enc = lookup(input.as_byte_view());
    if enc.is_unspecified() {
        return (input, enc);
    }
    (input.suffix_from(enc.marker_len()), enc)
}

/// Zero-copy trim over a shared buffer; the result shares `input`'s storage.
pub fn trim_shared(input: &Bytes) -> (Bytes, Encoding) {
    let enc = lookup(input);
    (input.slice(enc.marker_len()..), enc)
}
