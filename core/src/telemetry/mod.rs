//! telemetry/mod.rs
//! Deterministic counters for the streaming reader.
//!
//! Industry notes:
//! - Counters are plain values owned by each reader; no atomics, no globals.
//! - Snapshots are `bincode`-encodable so hosts can persist or ship them.

pub mod counters;

pub use counters::*;
