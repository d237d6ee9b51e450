//! Process-wide default logger and free-function facade
//!
//! One [`Logger`] per process backs the free functions of this module. It is
//! created at most once: either explicitly through [`install`], or on first
//! use with the defaults below.
//!
//! - level `Info`
//! - [`JsonFormatter`] with an ISO 8601 `time` field
//! - standard error behind a [`ConcurrentWriter`](crate::ConcurrentWriter)
//!
//! [`set_level`], [`set_formatter`] and [`set_output`] change the shared
//! instance and are visible to every thread. [`with_context`] returns a
//! detached logger and never changes the shared one.

use crate::core::{LogContext, LogLevel, Logger, LoggerError, Result, TimestampFormat};
use crate::core::{Formatter, Writer};
use crate::formatters::JsonFormatter;
use crate::writers;
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

fn create_default() -> Logger {
    Logger::builder()
        .min_level(LogLevel::Info)
        .formatter(JsonFormatter::new().with_timestamp(TimestampFormat::Iso8601))
        .output(writers::stderr())
        .build()
}

/// Install `logger` as the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] once the default logger
/// exists, whether from an earlier `install` or from a free function that
/// already used it.
pub fn install(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide logger, created with the defaults on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(create_default)
}

pub fn set_output<W: Writer + 'static>(writer: W) {
    default_logger().set_output(writer);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    default_logger().set_formatter(formatter);
}

pub fn set_level(level: LogLevel) {
    default_logger().set_level(level);
}

pub fn level() -> LogLevel {
    default_logger().level()
}

/// A new logger carrying `context`; the process-wide logger keeps its own.
pub fn with_context(context: LogContext) -> Logger {
    default_logger().with_context(context)
}

pub fn get_context() -> LogContext {
    default_logger().context().clone()
}

pub fn flush() -> Result<()> {
    default_logger().flush()
}

#[track_caller]
pub fn log(level: LogLevel, message: impl AsRef<str>) -> Result<()> {
    default_logger().log(level, message)
}

#[track_caller]
pub fn log_ctx(level: LogLevel, context: &LogContext, message: impl AsRef<str>) -> Result<()> {
    default_logger().log_ctx(level, context, message)
}

#[track_caller]
pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().logf(level, args)
}

#[track_caller]
pub fn logf_ctx(level: LogLevel, context: &LogContext, args: fmt::Arguments<'_>) -> Result<()> {
    default_logger().logf_ctx(level, context, args)
}

#[track_caller]
pub fn logln(level: LogLevel, values: &[&dyn fmt::Display]) -> Result<()> {
    default_logger().logln(level, values)
}

macro_rules! forward_level {
    ($name:literal, $plain:ident, $fmt:ident, $ctx:ident, $fmt_ctx:ident, $ln:ident) => {
        #[doc = concat!("Log `message` at ", $name, " level on the process-wide logger.")]
        pub fn $plain(message: impl AsRef<str>) -> Result<()> {
            default_logger().$plain(message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name, " level on the process-wide logger."
        )]
        pub fn $fmt(args: fmt::Arguments<'_>) -> Result<()> {
            default_logger().$fmt(args)
        }

        #[doc = concat!(
            "Log `message` at ", $name, " level with extra context for this call only."
        )]
        pub fn $ctx(context: &LogContext, message: impl AsRef<str>) -> Result<()> {
            default_logger().$ctx(context, message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name,
            " level with extra context for this call only."
        )]
        pub fn $fmt_ctx(context: &LogContext, args: fmt::Arguments<'_>) -> Result<()> {
            default_logger().$fmt_ctx(context, args)
        }

        #[doc = concat!(
            "Log the space-separated `values` at ", $name, " level on the process-wide logger."
        )]
        pub fn $ln(values: &[&dyn fmt::Display]) -> Result<()> {
            default_logger().$ln(values)
        }
    };
}

macro_rules! forward_terminal {
    ($name:literal, $plain:ident, $fmt:ident, $ctx:ident, $fmt_ctx:ident, $ln:ident) => {
        #[doc = concat!(
            "Log `message` at ", $name, " level on the process-wide logger; never returns."
        )]
        #[track_caller]
        pub fn $plain(message: impl AsRef<str>) -> ! {
            default_logger().$plain(message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name,
            " level on the process-wide logger; never returns."
        )]
        #[track_caller]
        pub fn $fmt(args: fmt::Arguments<'_>) -> ! {
            default_logger().$fmt(args)
        }

        #[doc = concat!("Log `message` at ", $name, " level with extra context; never returns.")]
        #[track_caller]
        pub fn $ctx(context: &LogContext, message: impl AsRef<str>) -> ! {
            default_logger().$ctx(context, message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name, " level with extra context; never returns."
        )]
        #[track_caller]
        pub fn $fmt_ctx(context: &LogContext, args: fmt::Arguments<'_>) -> ! {
            default_logger().$fmt_ctx(context, args)
        }

        #[doc = concat!("Log the space-separated `values` at ", $name, " level; never returns.")]
        #[track_caller]
        pub fn $ln(values: &[&dyn fmt::Display]) -> ! {
            default_logger().$ln(values)
        }
    };
}

forward_level!("info", print, printf, print_ctx, printf_ctx, println);
forward_level!("debug", debug, debugf, debug_ctx, debugf_ctx, debugln);
forward_level!("info", info, infof, info_ctx, infof_ctx, infoln);
forward_level!("warn", warn, warnf, warn_ctx, warnf_ctx, warnln);
forward_level!("error", error, errorf, error_ctx, errorf_ctx, errorln);
forward_terminal!("fatal", fatal, fatalf, fatal_ctx, fatalf_ctx, fatalln);
forward_terminal!("panic", panic, panicf, panic_ctx, panicf_ctx, panicln);
