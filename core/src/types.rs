use std::io;
use thiserror::Error;

use crate::encoding::Encoding;

/// Unified error for marker handling and the streaming reader.
/// - Reader failures reach callers as `io::Error` carrying a `BomError`
///   payload; use `BomError::from_io` to recover it.
/// - `Lookahead` keeps the source error as its `#[source]`, so the cause chain
///   of the surfaced `io::Error` reaches the original failure.
#[derive(Debug, Error)]
pub enum BomError {
    /// The source kept returning no data (interrupted / would block) during lookahead.
    #[error("no progress: source produced no data after {attempts} attempts while reading the byte order mark")]
    NoProgress { attempts: usize },

    /// The source failed while the reader was inspecting the leading bytes.
    #[error("byte order mark lookahead failed: {source}")]
    Lookahead {
        #[source]
        source: io::Error,
    },

    /// No source reader was supplied.
    #[error("no source reader supplied")]
    MissingSource,

    /// Raw id does not name an encoding.
    #[error("unknown encoding id: 0x{raw:02x}")]
    UnknownEncoding { raw: u8 },

    /// The requested marker is not valid UTF-8 and cannot prefix a `str`.
    #[error("{encoding} marker cannot be represented in UTF-8 text")]
    MarkerNotUtf8 { encoding: Encoding },

    /// A shared reader's lock was poisoned by a panicking holder.
    #[error("shared reader lock poisoned")]
    Poisoned,

    /// Counter snapshot could not be encoded or decoded.
    #[error("telemetry snapshot error: {0}")]
    Snapshot(String),
}

impl BomError {
    /// Return the `BomError` carried by an I/O error produced by this crate.
    pub fn from_io(err: &io::Error) -> Option<&BomError> {
        err.get_ref()?.downcast_ref::<BomError>()
    }

    /// True if `err` was raised while sniffing the marker (lookahead or no-progress).
    pub fn is_lookahead(err: &io::Error) -> bool {
        matches!(
            Self::from_io(err),
            Some(BomError::Lookahead { .. }) | Some(BomError::NoProgress { .. })
        )
    }

    /// True if `err` is the bounded zero-progress failure.
    pub fn is_no_progress(err: &io::Error) -> bool {
        matches!(Self::from_io(err), Some(BomError::NoProgress { .. }))
    }

    fn io_kind(&self) -> io::ErrorKind {
        match self {
            BomError::Lookahead { source } => source.kind(),
            BomError::MissingSource => io::ErrorKind::NotConnected,
            BomError::UnknownEncoding { .. } | BomError::MarkerNotUtf8 { .. } => {
                io::ErrorKind::InvalidInput
            }
            BomError::Snapshot(_) => io::ErrorKind::InvalidData,
            BomError::NoProgress { .. } | BomError::Poisoned => io::ErrorKind::Other,
        }
    }
}

impl From<BomError> for io::Error {
    fn from(e: BomError) -> Self {
        io::Error::new(e.io_kind(), e)
    }
}
