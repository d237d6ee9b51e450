//! # ctxlog
//!
//! Leveled, structured logging with pluggable formatters and
//! concurrency-safe writers.
//!
//! ## Features
//!
//! - **Levels**: `Debug < Info < Warn < Error < Fatal < Panic`; fatal events
//!   exit the process, panic events unwind
//! - **Context**: typed key/value fields on loggers and on single calls
//! - **Formatters**: JSON, text and logfmt, or any [`Formatter`]
//! - **Writers**: any [`Writer`]; [`ConcurrentWriter`] keeps concurrent
//!   events from interleaving
//! - **Process-wide logger**: free functions such as [`info`] and
//!   [`set_level`] forward to one shared [`Logger`]
//!
//! ```
//! use ctxlog::{context, ConcurrentWriter, LogLevel};
//!
//! ctxlog::set_output(ConcurrentWriter::new(Vec::new()));
//! ctxlog::set_level(LogLevel::Debug);
//! ctxlog::info_ctx(&context! { "user" => "alice", "admin" => false }, "signed in").unwrap();
//!
//! let request = ctxlog::with_context(context! { "request_id" => 7 });
//! request.warn("slow response").unwrap();
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Formatter, LogContext, LogLevel, LogPanic, Logger, LoggerBuilder,
        LoggerError, Result, TimestampFormat, Writer,
    };
    pub use crate::formatters::{JsonFormatter, LogfmtFormatter, TextFormatter};
    pub use crate::writers::{ConcurrentWriter, StreamWriter};
}

pub use crate::core::{
    FieldValue, Formatter, LogContext, LogLevel, LogPanic, Logger, LoggerBuilder, LoggerError,
    Result, TimestampFormat, Writer, FATAL_EXIT_CODE,
};
pub use crate::formatters::{JsonFormatter, LogfmtFormatter, TextFormatter};
pub use crate::global::*;
pub use crate::writers::{ConcurrentWriter, StreamWriter};
