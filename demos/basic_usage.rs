//! Basic logger usage example
//!
//! Demonstrates the process-wide logger, derived loggers with context and a
//! dedicated logger writing text to standard output.
//!
//! Run with: cargo run --example basic_usage

use ctxlog::prelude::*;
use ctxlog::{context, info, warn};

fn main() -> Result<()> {
    println!("=== ctxlog - Basic Usage Example ===\n");

    // The process-wide logger writes JSON to standard error
    println!("1. Process-wide logger:");
    ctxlog::set_level(LogLevel::Debug);
    ctxlog::debug("This is a debug message")?;
    ctxlog::info_ctx(&context! { "user" => "alice", "admin" => false }, "signed in")?;
    ctxlog::warnf(format_args!("{} retries left", 2))?;

    // Derived loggers carry their own context
    println!("\n2. Derived logger:");
    let request = ctxlog::with_context(context! { "request_id" => 7 });
    request.info("handling request")?;
    request.error_ctx(&context! { "status" => 503 }, "upstream unavailable")?;

    // A dedicated logger with text output and a minimum level
    println!("\n3. Text logger on stdout:");
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .formatter(TextFormatter::new().with_timestamp(TimestampFormat::Rfc3339))
        .output(ctxlog::writers::stdout())
        .build();
    logger.debug("Debug message (hidden)")?;
    info!(logger, "Server listening on port {}", 8080)?;
    warn!(logger, ctx: &context! { "queue" => "mail" }, "Backlog at {}%", 85)?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
