//! Benchmarks for stack capture and trace rendering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tracewrap::{Message, TraceConfig, Tracer};

/// Capture cost at increasing depth limits
fn benchmark_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");

    for depth in [1usize, 8, 32, 128] {
        let tracer = Tracer::from_config(TraceConfig::with_max_depth(depth)).unwrap();
        group.bench_with_input(BenchmarkId::new("wrap", depth), &tracer, |b, tracer| {
            b.iter(|| {
                let err = tracer.wrap(Some(Message::new("bench")), "context");
                std::hint::black_box(err);
            });
        });
    }
    group.finish();
}

/// Absent errors should cost nothing beyond the branch
fn benchmark_absent(c: &mut Criterion) {
    c.bench_function("wrap_none", |b| {
        b.iter(|| {
            let err = tracewrap::wrap(std::hint::black_box(None::<Message>), "context");
            std::hint::black_box(err);
        });
    });
}

/// First render resolves symbols; later renders hit the cache
fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("resolve_uncached", |b| {
        let err = tracewrap::newf!("render {}", 1);
        b.iter(|| std::hint::black_box(err.stack().resolve()));
    });

    group.bench_function("trace_text_cached", |b| {
        let err = tracewrap::newf!("render {}", 2);
        let _ = err.trace_text();
        b.iter(|| std::hint::black_box(err.trace_text()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_capture, benchmark_absent, benchmark_render);
criterion_main!(benches);
