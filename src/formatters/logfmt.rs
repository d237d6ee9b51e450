//! Logfmt formatter (key=value pairs)
//!
//! Example: `level=info message="Request processed" latency_ms=42 user="alice"`
//!
//! Nested contexts are flattened into dotted keys (`obj.inner=1`).

use crate::core::{FieldValue, Formatter, LogContext, LogLevel, Result, TimestampFormat};
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    timestamp_format: Option<TimestampFormat>,
}

impl LogfmtFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    fn push_fields(&self, parts: &mut Vec<String>, prefix: Option<&str>, context: &LogContext) {
        for (key, value) in context {
            let key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, self.escape_logfmt_key(key)),
                None => self.escape_logfmt_key(key),
            };
            let formatted_value = match value {
                FieldValue::String(s) => self.quote_logfmt_value(s),
                FieldValue::Int(i) => i.to_string(),
                FieldValue::Float(f) => f.to_string(),
                FieldValue::Bool(b) => b.to_string(),
                FieldValue::Null => "null".to_string(),
                FieldValue::Map(nested) => {
                    self.push_fields(parts, Some(&key), nested);
                    continue;
                }
            };
            parts.push(format!("{}={}", key, formatted_value));
        }
    }

    /// Escape a logfmt key (remove spaces and special chars)
    fn escape_logfmt_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
            .collect()
    }

    /// Escape a logfmt value (quote if contains spaces)
    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains([' ', '"', '=']) {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    /// Quote a logfmt value
    fn quote_logfmt_value(&self, value: &str) -> String {
        format!(
            "\"{}\"",
            value
                .replace('\\', "\\\\")
                .replace('"', "\\\"")
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t")
        )
    }
}

impl Formatter for LogfmtFormatter {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut parts = Vec::with_capacity(3 + context.len());

        if let Some(ref format) = self.timestamp_format {
            parts.push(format!(
                "time={}",
                self.escape_logfmt_value(&format.format(&Utc::now())?)
            ));
        }
        parts.push(format!("level={}", level.to_str()));
        // Message is always quoted
        parts.push(format!("message={}", self.quote_logfmt_value(message)));

        self.push_fields(&mut parts, None, context);

        if let Some(trace) = trace {
            parts.push(format!(
                "trace={}",
                self.quote_logfmt_value(&String::from_utf8_lossy(trace))
            ));
        }

        let mut line = parts.join(" ");
        line.push('\n');
        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        "logfmt"
    }
}
