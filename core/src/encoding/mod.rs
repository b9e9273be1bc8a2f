//! encoding/mod.rs
//! Closed table of recognized encodings and their byte order marks.
//!
//! Industry notes:
//! - Markers are fixed, immutable constants; lookups hand out `&'static` slices.
//! - Lookup prefers the longest marker (4 → 3 → 2 bytes) so UTF-32LE input is
//!   never mistaken for UTF-16LE.

pub mod types;
pub mod table;

pub use types::*;
pub use table::*;
