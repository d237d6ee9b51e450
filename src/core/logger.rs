//! Main logger implementation

use super::{
    error::Result,
    formatter::Formatter,
    log_context::LogContext,
    log_level::LogLevel,
    log_panic::LogPanic,
    writer::Writer,
};
use crate::formatters::JsonFormatter;
use crate::writers;
use parking_lot::RwLock;
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Exit status used after a fatal-level event has been written
pub const FATAL_EXIT_CODE: i32 = 1;

/// Level, formatter and writer are swapped as a unit so a log call never pairs
/// a new formatter with a stale writer.
#[derive(Clone)]
struct Settings {
    min_level: LogLevel,
    formatter: Arc<dyn Formatter>,
    writer: Arc<dyn Writer>,
}

/// Formatter and writer captured for one event.
struct Sinks {
    formatter: Arc<dyn Formatter>,
    writer: Arc<dyn Writer>,
}

/// Leveled, structured logger.
///
/// A logger filters events by level, merges its own context with any
/// per-call context, renders the result with its [`Formatter`] and hands the
/// bytes to its [`Writer`]. Configuration can be changed at any time through
/// `&self`, including while other threads are logging.
///
/// Fatal-level calls exit the process after writing; panic-level calls unwind
/// with a [`LogPanic`] payload. Both happen even when the configured level
/// filters the write out.
///
/// # Example
///
/// ```
/// use ctxlog::{context, ConcurrentWriter, JsonFormatter, LogLevel, Logger};
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .formatter(JsonFormatter::new())
///     .output(ConcurrentWriter::new(Vec::new()))
///     .context(context! { "service" => "billing" })
///     .build();
///
/// logger.info("started").unwrap();
/// let request = logger.with_context(context! { "request_id" => 42 });
/// request.debug_ctx(&context! { "path" => "/invoices" }, "handling request").unwrap();
/// ```
pub struct Logger {
    settings: RwLock<Settings>,
    context: LogContext,
}

macro_rules! level_methods {
    (
        $level:expr, $name:literal,
        $plain:ident, $fmt:ident, $ctx:ident, $fmt_ctx:ident, $ln:ident
    ) => {
        #[doc = concat!("Log `message` at ", $name, " level.")]
        #[inline]
        pub fn $plain(&self, message: impl AsRef<str>) -> Result<()> {
            self.log($level, message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name, " level; ",
            "nothing is formatted when the level is disabled."
        )]
        #[inline]
        pub fn $fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
            self.logf($level, args)
        }

        #[doc = concat!(
            "Log `message` at ", $name, " level with extra context for this call only."
        )]
        #[inline]
        pub fn $ctx(&self, context: &LogContext, message: impl AsRef<str>) -> Result<()> {
            self.log_ctx($level, context, message)
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name,
            " level with extra context for this call only."
        )]
        #[inline]
        pub fn $fmt_ctx(&self, context: &LogContext, args: fmt::Arguments<'_>) -> Result<()> {
            self.logf_ctx($level, context, args)
        }

        #[doc = concat!("Log the space-separated `values` at ", $name, " level.")]
        #[inline]
        pub fn $ln(&self, values: &[&dyn fmt::Display]) -> Result<()> {
            self.logln($level, values)
        }
    };
}

macro_rules! terminal_methods {
    (
        $level:expr, $name:literal, $then:literal,
        $plain:ident, $fmt:ident, $ctx:ident, $fmt_ctx:ident, $ln:ident
    ) => {
        #[doc = concat!("Log `message` at ", $name, " level, then ", $then, ".")]
        #[track_caller]
        pub fn $plain(&self, message: impl AsRef<str>) -> ! {
            self.terminate($level, None, Cow::Borrowed(message.as_ref()))
        }

        #[doc = concat!("Log pre-formatted arguments at ", $name, " level, then ", $then, ".")]
        #[track_caller]
        pub fn $fmt(&self, args: fmt::Arguments<'_>) -> ! {
            self.terminate($level, None, format_message(args))
        }

        #[doc = concat!("Log `message` at ", $name, " level with extra context, then ", $then, ".")]
        #[track_caller]
        pub fn $ctx(&self, context: &LogContext, message: impl AsRef<str>) -> ! {
            self.terminate($level, Some(context), Cow::Borrowed(message.as_ref()))
        }

        #[doc = concat!(
            "Log pre-formatted arguments at ", $name, " level with extra context, then ", $then, "."
        )]
        #[track_caller]
        pub fn $fmt_ctx(&self, context: &LogContext, args: fmt::Arguments<'_>) -> ! {
            self.terminate($level, Some(context), format_message(args))
        }

        #[doc = concat!("Log the space-separated `values` at ", $name, " level, then ", $then, ".")]
        #[track_caller]
        pub fn $ln(&self, values: &[&dyn fmt::Display]) -> ! {
            self.terminate($level, None, Cow::Owned(join_values(values)))
        }
    };
}

impl Logger {
    /// Create a logger at the default level (`Info`).
    #[must_use]
    pub fn new<W, F>(writer: W, formatter: F, context: LogContext) -> Self
    where
        W: Writer + 'static,
        F: Formatter + 'static,
    {
        Self {
            settings: RwLock::new(Settings {
                min_level: LogLevel::default(),
                formatter: Arc::new(formatter),
                writer: Arc::new(writer),
            }),
            context,
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.settings.write().min_level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.settings.read().min_level
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        self.settings.write().formatter = Arc::new(formatter);
    }

    pub fn set_output<W: Writer + 'static>(&self, writer: W) {
        self.settings.write().writer = Arc::new(writer);
    }

    /// Whether an event at `level` would be written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled(self.level())
    }

    /// Derive a logger whose context is this logger's context merged with
    /// `context` (the new fields win on collision).
    ///
    /// The derived logger starts with the same level, formatter and writer but
    /// is independent afterwards: changing one does not affect the other.
    /// `self` is left untouched.
    #[must_use]
    pub fn with_context(&self, context: LogContext) -> Logger {
        Logger {
            settings: RwLock::new(self.settings.read().clone()),
            context: self.context.merge(&context),
        }
    }

    /// The context attached to this logger; empty unless it was derived with
    /// [`with_context`](Self::with_context) or built with one.
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn flush(&self) -> Result<()> {
        let writer = Arc::clone(&self.settings.read().writer);
        writer.flush()
    }

    /// Log `message` at `level`.
    ///
    /// Returns the formatter's or writer's error, if any. Events below the
    /// configured level return `Ok(())` without being formatted or written.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        let message = message.as_ref();
        self.dispatch(level, None, || Cow::Borrowed(message))
    }

    /// Log `message` at `level`, merging `context` into this event only.
    #[track_caller]
    pub fn log_ctx(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: impl AsRef<str>,
    ) -> Result<()> {
        let message = message.as_ref();
        self.dispatch(level, Some(context), || Cow::Borrowed(message))
    }

    /// Log formatted arguments at `level`; see the [`log!`](crate::log) macro.
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        self.dispatch(level, None, || format_message(args))
    }

    #[track_caller]
    pub fn logf_ctx(
        &self,
        level: LogLevel,
        context: &LogContext,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        self.dispatch(level, Some(context), || format_message(args))
    }

    /// Log `values` joined by single spaces.
    #[track_caller]
    pub fn logln(&self, level: LogLevel, values: &[&dyn fmt::Display]) -> Result<()> {
        self.dispatch(level, None, || Cow::Owned(join_values(values)))
    }

    level_methods!(LogLevel::Info, "info", print, printf, print_ctx, printf_ctx, println);
    level_methods!(LogLevel::Debug, "debug", debug, debugf, debug_ctx, debugf_ctx, debugln);
    level_methods!(LogLevel::Info, "info", info, infof, info_ctx, infof_ctx, infoln);
    level_methods!(LogLevel::Warn, "warn", warn, warnf, warn_ctx, warnf_ctx, warnln);
    level_methods!(LogLevel::Error, "error", error, errorf, error_ctx, errorf_ctx, errorln);
    terminal_methods!(
        LogLevel::Fatal, "fatal", "exit the process with status 1",
        fatal, fatalf, fatal_ctx, fatalf_ctx, fatalln
    );
    terminal_methods!(
        LogLevel::Panic, "panic", "unwind with a `LogPanic` payload",
        panic, panicf, panic_ctx, panicf_ctx, panicln
    );

    #[track_caller]
    fn dispatch<'m>(
        &self,
        level: LogLevel,
        call_context: Option<&LogContext>,
        message: impl FnOnce() -> Cow<'m, str>,
    ) -> Result<()> {
        if level.is_terminal() {
            self.terminate(level, call_context, message());
        }

        let Some(sinks) = self.sinks_for(level) else {
            return Ok(());
        };
        self.emit(&sinks, level, call_context, &message(), None)
    }

    /// Snapshot formatter and writer if `level` passes the filter.
    fn sinks_for(&self, level: LogLevel) -> Option<Sinks> {
        let settings = self.settings.read();
        if !level.is_enabled(settings.min_level) {
            return None;
        }
        Some(Sinks {
            formatter: Arc::clone(&settings.formatter),
            writer: Arc::clone(&settings.writer),
        })
    }

    fn emit(
        &self,
        sinks: &Sinks,
        level: LogLevel,
        call_context: Option<&LogContext>,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<()> {
        let merged;
        let context = match call_context {
            Some(extra) if !extra.is_empty() => {
                merged = self.context.merge(extra);
                &merged
            }
            _ => &self.context,
        };

        let bytes = sinks.formatter.format(level, context, message, trace)?;
        sinks.writer.write(&bytes)
    }

    /// Write a fatal or panic event, then exit or unwind.
    #[track_caller]
    fn terminate(
        &self,
        level: LogLevel,
        call_context: Option<&LogContext>,
        message: Cow<'_, str>,
    ) -> ! {
        let trace = (level == LogLevel::Panic)
            .then(|| Backtrace::force_capture().to_string().into_bytes());

        let outcome = match self.sinks_for(level) {
            Some(sinks) => self
                .emit(&sinks, level, call_context, &message, trace.as_deref())
                .and_then(|()| sinks.writer.flush()),
            None => Ok(()),
        };

        if level == LogLevel::Fatal {
            if let Err(e) = outcome {
                eprintln!("[LOGGER ERROR] Failed to write fatal event: {}", e);
            }
            std::process::exit(FATAL_EXIT_CODE);
        }

        let context = match call_context {
            Some(extra) => self.context.merge(extra),
            None => self.context.clone(),
        };
        std::panic::panic_any(LogPanic::new(
            message.into_owned(),
            context,
            outcome.err(),
            Location::caller(),
        ))
    }
}

fn format_message(args: fmt::Arguments<'_>) -> Cow<'static, str> {
    match args.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(args.to_string()),
    }
}

fn join_values(values: &[&dyn fmt::Display]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            settings: RwLock::new(self.settings.read().clone()),
            context: self.context.clone(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings.read();
        f.debug_struct("Logger")
            .field("min_level", &settings.min_level)
            .field("formatter", &settings.formatter.name())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Defaults: `Info` level, [`JsonFormatter`] without timestamps, standard
/// error behind a [`ConcurrentWriter`](crate::ConcurrentWriter), empty context.
///
/// # Example
/// ```
/// use ctxlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .formatter(TextFormatter::new().with_timestamp(TimestampFormat::Rfc3339))
///     .output(ctxlog::writers::stdout())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    formatter: Option<Arc<dyn Formatter>>,
    writer: Option<Arc<dyn Writer>>,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::default(),
            formatter: None,
            writer: None,
            context: LogContext::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Read the minimum level from environment variable `var`
    ///
    /// Unset or unparsable values leave the current setting in place.
    #[must_use = "builder methods return a new value"]
    pub fn min_level_from_env(mut self, var: &str) -> Self {
        if let Some(level) = std::env::var(var).ok().and_then(|v| v.parse().ok()) {
            self.min_level = level;
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    /// Context attached to every event of the built logger
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            settings: RwLock::new(Settings {
                min_level: self.min_level,
                formatter: self
                    .formatter
                    .unwrap_or_else(|| Arc::new(JsonFormatter::new())),
                writer: self.writer.unwrap_or_else(|| Arc::new(writers::stderr())),
            }),
            context: self.context,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
