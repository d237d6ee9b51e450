//! Logging macros for ergonomic log message formatting.
//!
//! The level macros take a logger (any expression with the [`Logger`]
//! methods, such as `ctxlog::default_logger()`) followed by `format!`-style
//! arguments. An optional `ctx: <expr>,` after the logger attaches a
//! [`LogContext`] to that single event. Arguments are only formatted when the
//! level is enabled.
//!
//! [`Logger`]: crate::Logger
//! [`LogContext`]: crate::LogContext
//!
//! # Examples
//!
//! ```
//! use ctxlog::prelude::*;
//! use ctxlog::{context, info, warn};
//!
//! let logger = Logger::new(
//!     ConcurrentWriter::new(Vec::new()),
//!     TextFormatter::new(),
//!     LogContext::new(),
//! );
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! let request = context! { "path" => "/health", "status" => 503 };
//! warn!(logger, ctx: &request, "Upstream unavailable after {} retries", 3).unwrap();
//! ```

/// Build a [`LogContext`](crate::LogContext) from `key => value` pairs.
///
/// Values are anything convertible into [`FieldValue`](crate::FieldValue),
/// including nested contexts.
///
/// ```
/// use ctxlog::{context, FieldValue};
///
/// let ctx = context! {
///     "foo" => "bar",
///     "bah" => context! { "int" => 1, "nullable" => FieldValue::Null },
/// };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::LogContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::LogContext::new()$(.with_field($key, $value))+
    };
}

/// Log a message at an explicit level.
///
/// ```
/// # use ctxlog::prelude::*;
/// # let sink = ConcurrentWriter::new(Vec::new());
/// # let logger = Logger::new(sink, JsonFormatter::new(), LogContext::new());
/// use ctxlog::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.logf_ctx($level, $ctx, format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.debugf_ctx($ctx, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.infof_ctx($ctx, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.warnf_ctx($ctx, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.errorf_ctx($ctx, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit the process.
///
/// ```no_run
/// # use ctxlog::prelude::*;
/// # let logger = Logger::default();
/// use ctxlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, ctx: $ctx:expr, $($arg:tt)+) => {
        $logger.fatalf_ctx($ctx, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}
