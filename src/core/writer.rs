//! Writer trait for log output destinations

use super::error::Result;
use std::sync::Arc;

/// A sink for rendered log events.
///
/// One call to `write` receives exactly one rendered event. Errors from the
/// underlying sink are returned to the caller as-is; writers do not retry.
pub trait Writer: Send + Sync {
    fn write(&self, buf: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<W: Writer + ?Sized> Writer for Arc<W> {
    fn write(&self, buf: &[u8]) -> Result<()> {
        (**self).write(buf)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<W: Writer + ?Sized> Writer for Box<W> {
    fn write(&self, buf: &[u8]) -> Result<()> {
        (**self).write(buf)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
