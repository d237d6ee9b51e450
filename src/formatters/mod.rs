//! Formatter implementations
//!
//! - [`JsonFormatter`]: one JSON object per line, context flattened at the top level
//! - [`TextFormatter`]: human-readable `[LEVEL] message key=value` lines
//! - [`LogfmtFormatter`]: `key=value` pairs for log aggregation tools

pub mod json;
pub mod logfmt;
pub mod text;

pub use json::JsonFormatter;
pub use logfmt::LogfmtFormatter;
pub use text::TextFormatter;

pub use crate::core::Formatter;

use std::borrow::Cow;

/// Escape line breaks and tabs so one event always renders as one line.
pub(crate) fn sanitize(input: &str) -> Cow<'_, str> {
    if !input.contains(['\n', '\r', '\t']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t"),
    )
}
