// File: crates/chart-core/benches/render_bench.rs
// Summary: Chart build and SVG serialization over growing yearly datasets.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_chart::{Chart, RenderOptions, YearlyRecord};

fn build_records(n: usize) -> Vec<YearlyRecord> {
    (0..n)
        .map(|i| {
            let start = Utc.with_ymd_and_hms(1900 + i as i32, 1, 1, 0, 0, 0).unwrap();
            let sequence = (0..365).map(|d| ((i * 365 + d) as f64 * 0.01).sin().abs() * 0.4).collect();
            YearlyRecord::new(start, sequence)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg_string");
    for &n in &[10usize, 100usize] {
        let records = build_records(n);
        group.bench_function(format!("years_{n}"), |b| {
            b.iter(|| {
                let chart = Chart::from_records(&records, 70.0, RenderOptions::default()).expect("chart");
                black_box(chart.render_svg_string());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
