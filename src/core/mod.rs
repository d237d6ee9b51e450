//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod log_context;
pub mod log_level;
pub mod log_panic;
pub mod logger;
pub mod timestamp;
pub mod writer;

pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_panic::LogPanic;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
pub use writer::Writer;
