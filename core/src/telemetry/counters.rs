// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters collected while a `BomReader` services reads.
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::types::BomError;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, Encode, Decode, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReaderCounters {
    /// Calls made to the wrapped source (lookahead and pass-through).
    pub source_reads: u64,
    /// Bytes fetched into the lookahead window.
    pub lookahead_bytes: u64,
    /// Marker bytes discarded.
    pub marker_bytes: u64,
    /// Interrupted / would-block reads retried during lookahead.
    pub zero_progress_retries: u64,
    /// Bytes handed to the caller.
    pub bytes_delivered: u64,
}

impl ReaderCounters {
    pub fn add_source_read(&mut self) {
        self.source_reads += 1;
    }

    pub fn add_lookahead(&mut self, n: usize) {
        self.lookahead_bytes += n as u64;
    }

    pub fn add_marker(&mut self, marker_len: usize) {
        self.marker_bytes += marker_len as u64;
    }

    pub fn add_retry(&mut self) {
        self.zero_progress_retries += 1;
    }

    pub fn add_delivered(&mut self, n: usize) {
        self.bytes_delivered += n as u64;
    }

    pub fn merge(&mut self, other: &ReaderCounters) {
        self.source_reads += other.source_reads;
        self.lookahead_bytes += other.lookahead_bytes;
        self.marker_bytes += other.marker_bytes;
        self.zero_progress_retries += other.zero_progress_retries;
        self.bytes_delivered += other.bytes_delivered;
    }

    /// Encode with bincode's standard config.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BomError> {
        bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| BomError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, BomError> {
        let (counters, _) = bincode::decode_from_slice(buf, bincode::config::standard())
            .map_err(|e| BomError::Snapshot(e.to_string()))?;
        Ok(counters)
    }
}

impl AddAssign for ReaderCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
