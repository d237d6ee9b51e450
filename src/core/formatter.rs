//! Formatter trait for rendering log events

use super::{error::Result, log_context::LogContext, log_level::LogLevel};
use std::sync::Arc;

/// Renders one log event into bytes.
///
/// Implementations must not perform I/O; writing the result is the job of a
/// [`Writer`](super::Writer). Given the same inputs a formatter should produce
/// the same bytes (formatters with a timestamp enabled are the exception).
///
/// `trace` is only present for [`LogLevel::Panic`] events and holds the
/// captured backtrace.
pub trait Formatter: Send + Sync {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    fn name(&self) -> &str;
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        (**self).format(level, context, message, trace)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        (**self).format(level, context, message, trace)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
