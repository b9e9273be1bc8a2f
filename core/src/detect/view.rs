// ## 📂 File: `src/detect/view.rs`

//! detect/view.rs
//! Representation seam between text and raw bytes.

/// A borrowed buffer that can be inspected as bytes and re-sliced in its own type.
pub trait ByteView {
    fn as_byte_view(&self) -> &[u8];

    /// Suffix starting at byte offset `at`, in the same representation.
    /// Returns `self` if `at` is not a valid split point.
    fn suffix_from(&self, at: usize) -> &Self;
}

impl ByteView for [u8] {
    #[inline]
    fn as_byte_view(&self) -> &[u8] {
        self
    }

    #[inline]
    fn suffix_from(&self, at: usize) -> &Self {
        self.get(at..).unwrap_or(self)
    }
}

impl ByteView for str {
    #[inline]
    fn as_byte_view(&self) -> &[u8] {
        self.as_bytes()
    }

    // Only the UTF-8 marker can start a valid `str`, and it ends on a char boundary.
    #[inline]
    fn suffix_from(&self, at: usize) -> &Self {
        self.get(at..).unwrap_or(self)
    }
}
