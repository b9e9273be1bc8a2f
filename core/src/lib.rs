//! bom-core
//!
//! Unicode Byte Order Mark detection, trimming, prepending and streaming removal.
//! Pure Rust, blocking `std::io`, no transcoding.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Marker table and buffer helpers
pub mod encoding;
pub mod detect;
pub mod telemetry;

// Stream layers
pub mod stream;

pub use detect::{
    detect_encoding, prepend, prepend_shared, prepend_str, trim, trim_shared, write_bom, ByteView,
};
pub use encoding::Encoding;
pub use stream::{BomReader, MissingSource, ReaderConfig, SharedBomReader};
pub use types::BomError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::detect::{detect_encoding, prepend, prepend_str, trim, ByteView};
    pub use crate::encoding::Encoding;
    pub use crate::stream::{BomReader, ReaderConfig, SharedBomReader};
    pub use crate::types::BomError;
}
