//! Unwind payload raised by panic-level events

use super::{error::LoggerError, log_context::LogContext};
use std::fmt;
use std::panic::Location;

/// Payload of the unwind started by [`Logger::panic`](super::Logger::panic)
/// and the other panic-level calls.
///
/// The logger raises it with [`std::panic::panic_any`] after the event has
/// been written and never catches it itself. Callers that want to recover
/// intercept it with [`std::panic::catch_unwind`] and downcast the payload:
///
/// ```
/// use ctxlog::{ConcurrentWriter, JsonFormatter, LogContext, LogPanic, Logger};
/// use std::panic::{catch_unwind, AssertUnwindSafe};
///
/// let sink = ConcurrentWriter::new(Vec::new());
/// let logger = Logger::new(sink, JsonFormatter::new(), LogContext::new());
/// let payload = catch_unwind(AssertUnwindSafe(|| logger.panic("unrecoverable"))).unwrap_err();
/// let panic = payload.downcast_ref::<LogPanic>().unwrap();
/// assert_eq!(panic.message(), "unrecoverable");
/// ```
///
/// The panic is reported at the caller of the logging method, not inside this
/// crate. The default panic hook only prints `Box<dyn Any>` for a non-string
/// payload; a hook that downcasts to `LogPanic` can print the message:
///
/// ```
/// use ctxlog::LogPanic;
///
/// let default_hook = std::panic::take_hook();
/// std::panic::set_hook(Box::new(move |info| match info.payload().downcast_ref::<LogPanic>() {
///     Some(panic) => eprintln!("log panic at {}: {}", panic.location(), panic),
///     None => default_hook(info),
/// }));
/// ```
#[derive(Debug)]
pub struct LogPanic {
    message: String,
    context: LogContext,
    write_error: Option<LoggerError>,
    location: &'static Location<'static>,
}

impl LogPanic {
    pub(crate) fn new(
        message: String,
        context: LogContext,
        write_error: Option<LoggerError>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            message,
            context,
            write_error,
            location,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logger context merged with the per-call context of the event
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Error from formatting or writing the event, if any
    pub fn write_error(&self) -> Option<&LoggerError> {
        self.write_error.as_ref()
    }

    /// Source location of the logging call that raised the panic
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
