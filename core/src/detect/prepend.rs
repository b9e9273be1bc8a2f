// ## 📂 File: `src/detect/prepend.rs`

//! detect/prepend.rs
//! Idempotent marker insertion.
//!
//! A buffer that already starts with *any* recognized marker is returned
//! unchanged, whichever encoding was requested.

use std::borrow::Cow;
use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::encoding::{lookup, Encoding};
use crate::types::BomError;

#[inline]
fn needs_marker(input: &[u8], enc: Encoding) -> bool {
    !enc.is_unspecified() && lookup(input).is_unspecified()
}

/// Prefix `input` with `enc`'s marker unless it is `Unspecified` or the input
/// already carries a marker.
pub fn prepend(input: &[u8], enc: Encoding) -> Cow<'_, [u8]> {
    if !needs_marker(input, enc) {
        return Cow::Borrowed(input);
    }

    let marker = enc.marker_bytes();
    let mut out = Vec::with_capacity(marker.len() + input.len());
    out.extend_from_slice(marker);
    out.extend_from_slice(input);
    Cow::Owned(out)
}

/// Text flavour of [`prepend`].
///
/// Only the UTF-8 marker is valid UTF-8; asking for any other marker on an
/// unmarked string fails with `BomError::MarkerNotUtf8`.
pub fn prepend_str(input: &str, enc: Encoding) -> Result<Cow<'_, str>, BomError> {
    if !needs_marker(input.as_bytes(), enc) {
        return Ok(Cow::Borrowed(input));
    }
    if enc != Encoding::Utf8 {
        return Err(BomError::MarkerNotUtf8 { encoding: enc });
    }

    let mut out = String::with_capacity(enc.marker_len() + input.len());
    out.push('\u{feff}');
    out.push_str(input);
    Ok(Cow::Owned(out))
}

/// Shared-buffer flavour of [`prepend`]; unchanged inputs are cheap clones.
pub fn prepend_shared(input: &Bytes, enc: Encoding) -> Bytes {
    if !needs_marker(input, enc) {
        return input.clone();
    }

    let marker = enc.marker_bytes();
    let mut out = BytesMut::with_capacity(marker.len() + input.len());
    out.put_slice(marker);
    out.put_slice(input);
    out.freeze()
}

/// Write `enc`'s marker to `w`. Returns the number of bytes written (0 for `Unspecified`).
pub fn write_bom<W: Write + ?Sized>(w: &mut W, enc: Encoding) -> io::Result<usize> {
    let marker = enc.marker_bytes();
    w.write_all(marker)?;
    Ok(marker.len())
}
