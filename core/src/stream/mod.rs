// ## 1️⃣ `mod.rs` — public façade + re-exports

//! stream — BOM-aware `std::io::Read` wrappers.
//!
//! `BomReader` sniffs the first bytes of a source exactly once, discards a
//! recognized marker and then passes every later read straight through.
//! `SharedBomReader` puts a reader behind a mutex for concurrent callers.

pub mod config;
pub mod reader;
pub mod shared;

pub use config::{MissingSource, ReaderConfig};
pub use reader::BomReader;
pub use shared::SharedBomReader;
