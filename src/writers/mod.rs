//! Writer implementations

pub mod concurrent;
pub mod stream;

pub use concurrent::ConcurrentWriter;
pub use stream::StreamWriter;

pub use crate::core::Writer;

use std::io;

/// Standard error behind a lock; the default sink of the process-wide logger.
pub fn stderr() -> ConcurrentWriter<io::Stderr> {
    ConcurrentWriter::new(io::stderr())
}

/// Standard output behind a lock.
pub fn stdout() -> ConcurrentWriter<io::Stdout> {
    ConcurrentWriter::new(io::stdout())
}
