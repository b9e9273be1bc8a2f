// ## 📂 File: `src/stream/reader.rs`

//! stream/reader.rs
//! Streaming reader that strips a leading byte order mark.
//!
//! Design notes:
//! - Lookahead goes into a private 4-byte window, so the caller may pass a
//!   destination of any non-zero size on the first read.
//! - The window is only filled while a longer marker could still match; a
//!   decided prefix never triggers another source read.
//! - Interrupted / would-block reads are the "no data yet" signal. They are
//!   retried during lookahead up to `ReaderConfig::max_zero_progress_reads`.
//! - `read` takes `&mut self`: use from one thread at a time, or wrap in
//!   `SharedBomReader`. Detection state never goes back to `Fresh`.

use std::io::{self, ErrorKind, Read};

use tracing::{debug, trace, warn};

use crate::constants::MAX_BOM_LEN;
use crate::encoding::{could_extend, lookup, Encoding};
use crate::stream::config::{MissingSource, ReaderConfig};
use crate::telemetry::ReaderCounters;
use crate::types::BomError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Detected,
}

#[inline]
fn is_zero_progress(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock)
}

/// `Read` adapter that removes a leading BOM from `R`.
///
/// ```
/// use std::io::Read;
/// use bom_core::{BomReader, Encoding};
///
/// let mut rd = BomReader::new(&b"\xEF\xBB\xBFhello"[..]);
/// let mut out = String::new();
/// rd.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "hello");
/// assert_eq!(rd.encoding(), Encoding::Utf8);
/// ```
#[derive(Debug)]
pub struct BomReader<R> {
    inner: Option<R>,
    config: ReaderConfig,
    state: State,
    encoding: Encoding,
    // Lookahead bytes; after detection `window[pos..filled]` is still owed to the caller.
    window: [u8; MAX_BOM_LEN],
    filled: usize,
    pos: usize,
    counters: ReaderCounters,
}

impl<R: Read> BomReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self::build(Some(inner), config)
    }

    /// Construct over a possibly absent source.
    ///
    /// # Returns
    /// - `Err(BomError::MissingSource)` for `None` under `MissingSource::Reject`.
    /// - A reader whose first non-empty read fails with `ErrorKind::NotConnected`
    ///   for `None` under `MissingSource::FailOnRead`.
    pub fn from_optional(inner: Option<R>, config: ReaderConfig) -> Result<Self, BomError> {
        if inner.is_none() && config.missing_source == MissingSource::Reject {
            return Err(BomError::MissingSource);
        }
        Ok(Self::build(inner, config))
    }

    fn build(inner: Option<R>, config: ReaderConfig) -> Self {
        Self {
            inner,
            config,
            state: State::Fresh,
            encoding: Encoding::Unspecified,
            window: [0u8; MAX_BOM_LEN],
            filled: 0,
            pos: 0,
            counters: ReaderCounters::default(),
        }
    }

    /// Detected encoding; `Unspecified` until a read has run detection.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn is_detected(&self) -> bool {
        self.state == State::Detected
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn counters(&self) -> &ReaderCounters {
        &self.counters
    }

    pub fn get_ref(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.inner.as_mut()
    }

    /// Unwrap the source. Lookahead bytes not yet delivered are dropped.
    pub fn into_inner(self) -> Option<R> {
        self.inner
    }

    /// Fill the window until the prefix is decided or the source ends.
    /// Returns `true` if the source signalled end-of-data.
    fn fill_window(&mut self) -> io::Result<bool> {
        let source = self.inner.as_mut().ok_or(BomError::MissingSource)?;
        let max_retries = self.config.max_zero_progress_reads;
        let mut zero_progress = 0usize;

        while could_extend(&self.window[..self.filled]) {
            self.counters.add_source_read();
            match source.read(&mut self.window[self.filled..]) {
                Ok(0) => return Ok(true),
                Ok(n) => {
                    self.filled += n;
                    self.counters.add_lookahead(n);
                    zero_progress = 0;
                }
                Err(e) if is_zero_progress(&e) => {
                    zero_progress += 1;
                    if zero_progress > max_retries {
                        warn!(attempts = zero_progress, "bom lookahead made no progress");
                        return Err(BomError::NoProgress { attempts: zero_progress }.into());
                    }
                    self.counters.add_retry();
                    trace!(attempt = zero_progress, kind = ?e.kind(), "bom lookahead retry");
                }
                Err(e) => {
                    warn!(error = %e, fetched = self.filled, "bom lookahead failed");
                    return Err(BomError::Lookahead { source: e }.into());
                }
            }
        }
        Ok(false)
    }

    /// Run the one-time detection pass. On error the reader stays `Fresh`
    /// and keeps the bytes fetched so far.
    fn detect(&mut self) -> io::Result<bool> {
        let eof = self.fill_window()?;

        let enc = lookup(&self.window[..self.filled]);
        self.encoding = enc;
        self.pos = enc.marker_len();
        self.state = State::Detected;
        self.counters.add_marker(self.pos);

        debug!(encoding = %enc, marker_len = self.pos, fetched = self.filled, eof, "bom detection done");
        Ok(eof)
    }

    fn drain_window(&mut self, buf: &mut [u8]) -> usize {
        let n = (self.filled - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.window[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}

impl<R: Read> Read for BomReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.state == State::Fresh {
            let eof = self.detect()?;
            // Marker was the whole stream.
            if eof && self.pos == self.filled {
                return Ok(0);
            }
        }

        if self.pos < self.filled {
            let n = self.drain_window(buf);
            self.counters.add_delivered(n);
            return Ok(n);
        }

        let source = self.inner.as_mut().ok_or(BomError::MissingSource)?;
        self.counters.add_source_read();
        let n = source.read(buf)?;
        self.counters.add_delivered(n);
        Ok(n)
    }
}
