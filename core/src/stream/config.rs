// ## 📂 File: `src/stream/config.rs`

//! stream/config.rs
//! Reader configuration points.
//!
//! Design notes:
//! - Both knobs the marker sniffing depends on are explicit: the zero-progress
//!   retry bound and what to do when no source was supplied.
//! - Serializable so hosts can embed it in their own config files.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_ZERO_PROGRESS_READS;

/// Policy for constructing a reader without a source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingSource {
    /// `BomReader::from_optional(None, ..)` fails with `BomError::MissingSource`.
    #[default]
    Reject,
    /// Construction succeeds; the first non-empty read fails instead.
    FailOnRead,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Consecutive interrupted / would-block source reads tolerated while
    /// sniffing the marker. One more than this fails with `NoProgress`.
    pub max_zero_progress_reads: usize,
    pub missing_source: MissingSource,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_zero_progress_reads: DEFAULT_MAX_ZERO_PROGRESS_READS,
            missing_source: MissingSource::Reject,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_zero_progress_reads(mut self, max: usize) -> Self {
        self.max_zero_progress_reads = max;
        self
    }

    pub fn with_missing_source(mut self, policy: MissingSource) -> Self {
        self.missing_source = policy;
        self
    }
}
