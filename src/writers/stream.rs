//! Basic, unsynchronized writer

use crate::core::{LoggerError, Result, Writer};
use std::io;

/// Writes each event straight to a shared byte stream.
///
/// Works with any sink that can be written through a shared reference
/// (`Stderr`, `Stdout`, `File`, `TcpStream`, ...). No lock is taken, so two
/// threads writing large events at once may see their bytes interleaved;
/// wrap the sink in a [`ConcurrentWriter`](super::ConcurrentWriter) when that
/// matters.
#[derive(Debug)]
pub struct StreamWriter<W> {
    inner: W,
}

impl<W> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Writer for StreamWriter<W>
where
    W: Send + Sync,
    for<'a> &'a W: io::Write,
{
    fn write(&self, buf: &[u8]) -> Result<()> {
        let mut sink = &self.inner;
        io::Write::write_all(&mut sink, buf)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut sink = &self.inner;
        io::Write::flush(&mut sink)
            .map_err(|e| LoggerError::io_operation("flushing", "stream writer sink", e))
    }
}
