//! constants.rs
//! Marker byte sequences and reader defaults.
//!
//! Industry notes:
//! - Markers are the big/little-endian serializations of U+FEFF in each encoding.
//! - UTF-16LE's marker is a strict prefix of UTF-32LE's, so lookups must try
//!   the longer markers first.

/// UTF-8 marker (U+FEFF encoded as UTF-8).
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 big-endian marker.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-16 little-endian marker.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-32 big-endian marker.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
/// UTF-32 little-endian marker.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

/// Shortest recognized marker. Fewer bytes than this can never be a marker.
pub const MIN_BOM_LEN: usize = 2;
/// Longest recognized marker; also the size of the reader's lookahead window.
pub const MAX_BOM_LEN: usize = 4;

/// Consecutive zero-progress source reads tolerated during lookahead.
pub const DEFAULT_MAX_ZERO_PROGRESS_READS: usize = 100;

/// Stable raw identifiers for `Encoding` (mirrored by `#[repr(u8)]`).
pub mod encoding_ids {
    pub const UNSPECIFIED: u8          = 0x00;
    pub const UTF8: u8                 = 0x01;
    pub const UTF16_BIG_ENDIAN: u8     = 0x02;
    pub const UTF16_LITTLE_ENDIAN: u8  = 0x03;
    pub const UTF32_BIG_ENDIAN: u8     = 0x04;
    pub const UTF32_LITTLE_ENDIAN: u8  = 0x05;
}
