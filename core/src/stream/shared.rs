// ## 📂 File: `src/stream/shared.rs`

//! stream/shared.rs
//! Mutex-guarded reader for concurrent callers.
//!
//! Every read, including the one that runs detection, holds the lock, so the
//! `Fresh -> Detected` transition happens exactly once and later callers see
//! the detected state. Ordering of the payload between callers is whatever
//! order they acquire the lock in.

use std::io::{self, Read};
use std::sync::{Mutex, MutexGuard};

use crate::encoding::Encoding;
use crate::stream::reader::BomReader;
use crate::telemetry::ReaderCounters;
use crate::types::BomError;

#[derive(Debug)]
pub struct SharedBomReader<R> {
    inner: Mutex<BomReader<R>>,
}

impl<R: Read> SharedBomReader<R> {
    pub fn new(reader: BomReader<R>) -> Self {
        Self { inner: Mutex::new(reader) }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BomReader<R>>, BomError> {
        self.inner.lock().map_err(|_| BomError::Poisoned)
    }

    pub fn encoding(&self) -> Result<Encoding, BomError> {
        Ok(self.lock()?.encoding())
    }

    pub fn is_detected(&self) -> Result<bool, BomError> {
        Ok(self.lock()?.is_detected())
    }

    pub fn counters(&self) -> Result<ReaderCounters, BomError> {
        Ok(self.lock()?.counters().clone())
    }

    pub fn into_inner(self) -> Result<BomReader<R>, BomError> {
        self.inner.into_inner().map_err(|_| BomError::Poisoned)
    }
}

impl<R: Read> From<BomReader<R>> for SharedBomReader<R> {
    fn from(reader: BomReader<R>) -> Self {
        Self::new(reader)
    }
}

impl<R: Read> Read for &SharedBomReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.lock()?.read(buf)
    }
}

impl<R: Read> Read for SharedBomReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.inner.get_mut().map_err(|_| BomError::Poisoned)?.read(buf)
    }
}
