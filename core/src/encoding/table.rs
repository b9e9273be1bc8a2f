// ## 📂 File: `src/encoding/table.rs`

//! encoding/table.rs
//! Prefix lookup against the marker table.

use crate::constants::MIN_BOM_LEN;
use crate::encoding::types::Encoding;

/// Return the encoding whose marker prefixes `bytes`, longest marker first.
///
/// Fewer than `MIN_BOM_LEN` bytes is always `Unspecified`.
pub fn lookup(bytes: &[u8]) -> Encoding {
    if bytes.len() < MIN_BOM_LEN {
        return Encoding::Unspecified;
    }

    Encoding::ALL
        .into_iter()
        .find(|enc| bytes.starts_with(enc.marker_bytes()))
        .unwrap_or(Encoding::Unspecified)
}

/// True if some marker longer than `prefix` still starts with `prefix`,
/// i.e. more bytes could change the outcome of `lookup`.
pub fn could_extend(prefix: &[u8]) -> bool {
    Encoding::ALL.iter().any(|enc| {
        let marker = enc.marker_bytes();
        marker.len() > prefix.len() && marker.starts_with(prefix)
    })
}

/// Marker bytes for a raw encoding id; empty for unknown ids.
pub fn marker_for_raw(raw: u8) -> &'static [u8] {
    Encoding::from_raw(raw).marker_bytes()
}
