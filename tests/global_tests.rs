//! Tests for the process-wide logger and its free functions
//!
//! All tests in this binary share one logger, so each takes `GLOBAL` for its
//! whole body and reconfigures output, level and formatter up front.

use ctxlog::prelude::*;
use ctxlog::{context, info};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

static GLOBAL: Mutex<()> = parking_lot::const_mutex(());

fn capture(level: LogLevel) -> Arc<ConcurrentWriter<Vec<u8>>> {
    let sink = Arc::new(ConcurrentWriter::new(Vec::new()));
    ctxlog::set_output(Arc::clone(&sink));
    ctxlog::set_formatter(TextFormatter::new());
    ctxlog::set_level(level);
    sink
}

fn output(sink: &ConcurrentWriter<Vec<u8>>) -> String {
    sink.with_inner(|buf| String::from_utf8(buf.clone()).unwrap())
}

#[test]
fn test_set_level_filters_free_functions() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Error);

    ctxlog::info("hidden").unwrap();
    ctxlog::debug("hidden").unwrap();
    ctxlog::warnf(format_args!("hidden {}", 1)).unwrap();
    assert_eq!(output(&sink), "");

    ctxlog::error("shown").unwrap();
    assert_eq!(output(&sink), "[ERROR] shown\n");
    assert_eq!(ctxlog::level(), LogLevel::Error);
}

#[test]
fn test_method_families() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Debug);
    let ctx = context! { "attempt" => 2 };

    ctxlog::print("print").unwrap();
    ctxlog::printf(format_args!("printf {}", "x")).unwrap();
    ctxlog::println(&[&"println", &3, &true]).unwrap();
    ctxlog::debug_ctx(&ctx, "debug").unwrap();
    ctxlog::infof_ctx(&ctx, format_args!("retry {}", 2)).unwrap();
    ctxlog::warnln(&[&"slow", &1.5]).unwrap();
    ctxlog::log(LogLevel::Error, "explicit").unwrap();
    ctxlog::log_ctx(LogLevel::Warn, &ctx, "explicit ctx").unwrap();

    assert_eq!(
        output(&sink),
        "[INFO ] print\n\
         [INFO ] printf x\n\
         [INFO ] println 3 true\n\
         [DEBUG] debug attempt=2\n\
         [INFO ] retry 2 attempt=2\n\
         [WARN ] slow 1.5\n\
         [ERROR] explicit\n\
         [WARN ] explicit ctx attempt=2\n"
    );
}

#[test]
fn test_macros_accept_default_logger() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Info);

    info!(ctxlog::default_logger(), "port {}", 8080).unwrap();

    assert_eq!(output(&sink), "[INFO ] port 8080\n");
}

#[test]
fn test_with_context_leaves_default_logger_alone() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Info);

    let request = ctxlog::with_context(context! { "request_id" => 7 });
    request.info("derived").unwrap();
    ctxlog::info("global").unwrap();

    assert!(ctxlog::get_context().is_empty());
    assert_eq!(output(&sink), "[INFO ] derived request_id=7\n[INFO ] global\n");

    // the derived logger keeps the configuration it was created with
    ctxlog::set_level(LogLevel::Error);
    request.info("still shown").unwrap();
    ctxlog::info("now hidden").unwrap();
    assert!(output(&sink).ends_with("[INFO ] still shown request_id=7\n"));
}

#[test]
fn test_panic_unwinds_with_payload() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Info);

    let payload = catch_unwind(AssertUnwindSafe(|| {
        ctxlog::panic_ctx(&context! { "shard" => 3 }, "corrupted index")
    }))
    .unwrap_err();

    let panic = payload.downcast_ref::<LogPanic>().expect("LogPanic payload");
    assert_eq!(panic.message(), "corrupted index");
    assert_eq!(panic.context().get("shard"), Some(&FieldValue::Int(3)));
    assert!(panic.write_error().is_none());

    let written = output(&sink);
    assert!(written.starts_with("[PANIC] corrupted index shard=3\n"));
}

#[test]
fn test_panic_location_is_the_facade_caller() {
    let _guard = GLOBAL.lock();
    let _sink = capture(LogLevel::Info);

    let mut expected_line = 0;
    let payload = catch_unwind(AssertUnwindSafe(|| {
        expected_line = line!() + 1;
        ctxlog::panicln(&[&"lost", &"quorum"])
    }))
    .unwrap_err();

    let panic = payload.downcast_ref::<LogPanic>().expect("LogPanic payload");
    assert_eq!(panic.location().file(), file!());
    assert_eq!(panic.location().line(), expected_line);
}

#[test]
fn test_panic_event_carries_trace() {
    let _guard = GLOBAL.lock();
    let sink = capture(LogLevel::Panic);
    ctxlog::set_formatter(JsonFormatter::new());

    ctxlog::error("hidden").unwrap();
    let result = catch_unwind(|| ctxlog::panicf(format_args!("code {}", 9)));
    assert!(result.is_err());

    let written = output(&sink);
    assert_eq!(written.lines().count(), 1);
    let parsed: serde_json::Value = serde_json::from_str(written.lines().next().unwrap()).unwrap();
    assert_eq!(parsed["level"], "panic");
    assert_eq!(parsed["message"], "code 9");
    assert!(parsed["trace"].is_string());
}

#[test]
fn test_install_rejected_once_initialized() {
    let _guard = GLOBAL.lock();
    let _ = ctxlog::default_logger();

    let err = ctxlog::install(Logger::default()).unwrap_err();
    assert!(matches!(err, LoggerError::AlreadyInitialized));
}
