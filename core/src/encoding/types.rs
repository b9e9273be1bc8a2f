// ## 📂 File: `src/encoding/types.rs`

//! encoding/types.rs
//! `Encoding` registry with stable raw ids.

use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{encoding_ids, UTF16_BE_BOM, UTF16_LE_BOM, UTF32_BE_BOM, UTF32_LE_BOM, UTF8_BOM};
use crate::types::BomError;

/// Character encodings announced by a byte order mark.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum Encoding {
    /// No marker recognized.
    Unspecified       = encoding_ids::UNSPECIFIED,
    Utf8              = encoding_ids::UTF8,
    Utf16BigEndian    = encoding_ids::UTF16_BIG_ENDIAN,
    Utf16LittleEndian = encoding_ids::UTF16_LITTLE_ENDIAN,
    Utf32BigEndian    = encoding_ids::UTF32_BIG_ENDIAN,
    Utf32LittleEndian = encoding_ids::UTF32_LITTLE_ENDIAN,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Unspecified
    }
}

impl Encoding {
    /// Recognized encodings in lookup priority order (longest marker first).
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf32BigEndian,
        Encoding::Utf32LittleEndian,
        Encoding::Utf8,
        Encoding::Utf16BigEndian,
        Encoding::Utf16LittleEndian,
    ];

    /// Marker bytes; empty for `Unspecified`.
    #[inline]
    pub const fn marker_bytes(self) -> &'static [u8] {
        match self {
            Encoding::Unspecified       => &[],
            Encoding::Utf8              => &UTF8_BOM,
            Encoding::Utf16BigEndian    => &UTF16_BE_BOM,
            Encoding::Utf16LittleEndian => &UTF16_LE_BOM,
            Encoding::Utf32BigEndian    => &UTF32_BE_BOM,
            Encoding::Utf32LittleEndian => &UTF32_LE_BOM,
        }
    }

    /// Marker length in bytes: 0, 2, 3 or 4.
    #[inline]
    pub const fn marker_len(self) -> usize {
        self.marker_bytes().len()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Unspecified       => "Unspecified",
            Encoding::Utf8              => "UTF8",
            Encoding::Utf16BigEndian    => "UTF16BigEndian",
            Encoding::Utf16LittleEndian => "UTF16LittleEndian",
            Encoding::Utf32BigEndian    => "UTF32BigEndian",
            Encoding::Utf32LittleEndian => "UTF32LittleEndian",
        }
    }

    #[inline]
    pub const fn is_unspecified(self) -> bool {
        matches!(self, Encoding::Unspecified)
    }

    /// True if `self` is one of `candidates`.
    pub fn is_any_of(self, candidates: &[Encoding]) -> bool {
        candidates.contains(&self)
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn verify(raw: u8) -> Result<(), BomError> {
        Encoding::try_from_primitive(raw)
            .map(|_| ())
            .map_err(|_| BomError::UnknownEncoding { raw })
    }

    /// Lenient conversion: unknown ids map to `Unspecified`.
    pub fn from_raw(raw: u8) -> Encoding {
        Encoding::try_from_primitive(raw).unwrap_or(Encoding::Unspecified)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
