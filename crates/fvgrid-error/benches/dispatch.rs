//! Dispatch-path costs: the filtered early-out versus full rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fvgrid_error::codes::GridErr;
use fvgrid_error::{raise_status, report, Config, ErrorConfig, ErrorManager, Policy, Severity};

fn bench_report_filtered(c: &mut Criterion) {
    // Everything below Fatal is dropped before any string work.
    Config::set(ErrorConfig::new().min_severity(Severity::Fatal));
    c.bench_function("report_filtered_out", |b| {
        b.iter(|| {
            report(
                black_box(GridErr::InvalidN),
                black_box(&[("N", String::from("-5"))]),
            );
        });
    });
}

fn bench_report_rendered(c: &mut Criterion) {
    Config::set(ErrorConfig::new().min_severity(Severity::Trace));
    c.bench_function("report_rendered_and_buffered", |b| {
        b.iter(|| {
            report(
                black_box(GridErr::InvalidDomain),
                black_box(&[("A", String::from("0.0")), ("B", String::from("-1.0"))]),
            );
            ErrorManager::flush()
        });
    });
}

fn bench_raise_status(c: &mut Criterion) {
    Config::set(ErrorConfig::new().policy(Policy::Status).min_severity(Severity::Fatal));
    c.bench_function("raise_status_failure", |b| {
        b.iter(|| {
            raise_status(
                black_box(GridErr::DegenerateMesh),
                black_box(&[]),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_report_filtered,
    bench_report_rendered,
    bench_raise_status
);
criterion_main!(benches);
