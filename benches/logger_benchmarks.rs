//! Criterion benchmarks for ctxlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ctxlog::context;
use ctxlog::prelude::*;
use std::io;

fn bench_logger() -> Logger {
    Logger::builder()
        .min_level(LogLevel::Debug)
        .formatter(JsonFormatter::new())
        .output(ConcurrentWriter::new(io::sink()))
        .context(context! { "_n" => "bench", "_p" => 4242 })
        .build()
}

fn test_object() -> LogContext {
    context! {
        "foo" => "bar",
        "bah" => context! {
            "int" => 1,
            "float" => -100.23,
            "date" => "06-01-01T15:04:05-0700",
            "bool" => true,
            "nullable" => FieldValue::Null,
        },
    }
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = bench_logger();
    logger.set_level(LogLevel::Error);

    group.bench_function("debug_plain", |b| {
        b.iter(|| logger.debug(black_box("dropped")));
    });

    group.bench_function("debugf_args", |b| {
        b.iter(|| logger.debugf(format_args!("dropped {}", black_box(42))));
    });

    group.finish();
}

// ============================================================================
// JSON Formatting Benchmarks
// ============================================================================

fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");
    group.throughput(Throughput::Elements(1));

    let logger = bench_logger();
    let flat = context! { "key" => 1, "key2" => "string", "key3" => false };
    let nested = context! { "key" => 1, "obj" => test_object() };

    group.bench_function("message_only", |b| {
        b.iter(|| logger.info(black_box("message")));
    });

    group.bench_function("flat_context", |b| {
        b.iter(|| logger.debug_ctx(black_box(&flat), "debug"));
    });

    group.bench_function("nested_context", |b| {
        b.iter(|| logger.warn_ctx(black_box(&nested), "warn"));
    });

    group.bench_function("with_context", |b| {
        b.iter(|| {
            let derived = logger.with_context(black_box(flat.clone()));
            derived.info("derived")
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Comparison Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let ctx = context! { "key" => 1, "obj" => test_object() };
    let json = JsonFormatter::new();
    let text = TextFormatter::new();
    let logfmt = LogfmtFormatter::new();

    group.bench_function("json", |b| {
        b.iter(|| json.format(LogLevel::Info, black_box(&ctx), "message", None));
    });

    group.bench_function("text", |b| {
        b.iter(|| text.format(LogLevel::Info, black_box(&ctx), "message", None));
    });

    group.bench_function("logfmt", |b| {
        b.iter(|| logfmt.format(LogLevel::Info, black_box(&ctx), "message", None));
    });

    group.finish();
}

criterion_group!(benches, bench_filtered, bench_json, bench_formatters);
criterion_main!(benches);
