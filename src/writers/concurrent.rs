//! Concurrency-safe writer

use crate::core::{LoggerError, Result, Writer};
use parking_lot::Mutex;
use std::io;

/// Serializes writes to an underlying byte sink.
///
/// Each event is written in full while the lock is held, so concurrent
/// callers never see their bytes spliced together. The lock is released on
/// every path, and errors from the sink are returned unchanged without retry.
///
/// # Example
///
/// ```
/// use ctxlog::{ConcurrentWriter, Writer};
///
/// let writer = ConcurrentWriter::new(Vec::new());
/// writer.write(b"hello\n").unwrap();
/// assert_eq!(writer.into_inner(), b"hello\n");
/// ```
#[derive(Debug)]
pub struct ConcurrentWriter<W> {
    inner: Mutex<W>,
}

impl<W: io::Write + Send> ConcurrentWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Run `f` with exclusive access to the sink.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: io::Write + Send> Writer for ConcurrentWriter<W> {
    fn write(&self, buf: &[u8]) -> Result<()> {
        let mut sink = self.inner.lock();
        sink.write_all(buf)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.inner
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", "concurrent writer sink", e))
    }
}
