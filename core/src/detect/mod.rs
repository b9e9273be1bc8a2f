//! detect/mod.rs
//! Buffer-oriented marker detection, trimming and prepending.
//!
//! Industry notes:
//! - The algorithm runs once over a byte view; `ByteView` hands back results
//!   in the caller's own representation (`[u8]` or `str`).
//! - Nothing here mutates its input: trims return sub-views, prepends return
//!   `Cow` and only allocate when a marker is actually added.

pub mod view;
pub mod trim;
pub mod prepend;

pub use view::*;
pub use trim::*;
pub use prepend::*;
