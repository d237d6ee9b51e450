//! JSON formatter for structured logging
//!
//! Each event is rendered as a single-line JSON object (JSONL):
//!
//! ```text
//! {"time":"...","level":"info","message":"...","<key>":<value>,...,"trace":"..."}
//! ```
//!
//! - `time` is present only when a [`TimestampFormat`] is configured.
//! - Context keys are flattened at the top level in key order, with their
//!   types preserved. Nested contexts become nested objects.
//! - A context key that equals a reserved name (`time`, `level`, `message`,
//!   `trace`) is written as `fields.<key>`, with further `fields.` prefixes
//!   while that name is already taken by another context key.
//! - `trace` is present only for panic events.

use crate::core::{Formatter, LogContext, LogLevel, Result, TimestampFormat};
use chrono::Utc;
use std::borrow::Cow;

const RESERVED_KEYS: [&str; 4] = ["time", "level", "message", "trace"];

#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: Option<TimestampFormat>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `time` field rendered with `format`
    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Output name for a context key. Reserved names gain `fields.` prefixes
    /// until the result clashes with no key already in `context`.
    fn field_name<'a>(context: &LogContext, key: &'a str) -> Cow<'a, str> {
        if !RESERVED_KEYS.contains(&key) {
            return Cow::Borrowed(key);
        }
        let mut name = format!("fields.{}", key);
        while context.contains_key(&name) {
            name.insert_str(0, "fields.");
        }
        Cow::Owned(name)
    }
}

/// Appends `"key":` to an object under construction.
struct ObjectWriter {
    buf: Vec<u8>,
    empty: bool,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::with_capacity(256);
        buf.push(b'{');
        Self { buf, empty: true }
    }

    fn field<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        if !self.empty {
            self.buf.push(b',');
        }
        self.empty = false;
        serde_json::to_writer(&mut self.buf, key)?;
        self.buf.push(b':');
        serde_json::to_writer(&mut self.buf, value)?;
        Ok(())
    }

    fn finish(mut self) -> Vec<u8> {
        self.buf.extend_from_slice(b"}\n");
        self.buf
    }
}

impl Formatter for JsonFormatter {
    fn format(
        &self,
        level: LogLevel,
        context: &LogContext,
        message: &str,
        trace: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        let mut object = ObjectWriter::new();

        if let Some(ref format) = self.timestamp_format {
            object.field("time", &format.to_json_value(&Utc::now())?)?;
        }
        object.field("level", level.to_str())?;
        object.field("message", message)?;

        for (key, value) in context {
            object.field(&Self::field_name(context, key), value)?;
        }

        if let Some(trace) = trace {
            object.field("trace", &String::from_utf8_lossy(trace))?;
        }

        Ok(object.finish())
    }

    fn name(&self) -> &str {
        "json"
    }
}
