//! Human-readable text formatter

use super::sanitize;
use crate::core::{Formatter, LogContext, LogLevel, Result, TimestampFormat};
use chrono::Utc;
use std::fmt::Write as _;

/// Renders `[<time>] [LEVEL] message key=value ...` lines.
///
/// Message and context are escaped so an event always occupies one line.
/// Panic events append the captured trace on the following lines.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    timestamp_format: Option<TimestampFormat>,
    use_colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix each line with a timestamp rendered with `format`
    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Color the level label. Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn level_label(&self, level: LogLevel) -> String {
        let label = format!("{:5}", level.label());
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            return label.color(level.color_code()).to_string();
        }
        label
    }
}

impl Formatter for TextFormatter {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut line = String::with_capacity(64 + message.len());

        if let Some(ref format) = self.timestamp_format {
            let _ = write!(line, "[{}] ", format.format(&Utc::now())?);
        }
        let _ = write!(line, "[{}] {}", self.level_label(level), sanitize(message));

        if !context.is_empty() {
            line.push(' ');
            line.push_str(&sanitize(&context.format_fields()));
        }
        line.push('\n');

        if let Some(trace) = trace {
            let trace = String::from_utf8_lossy(trace);
            line.push_str(&trace);
            if !trace.ends_with('\n') {
                line.push('\n');
            }
        }

        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        "text"
    }
}
