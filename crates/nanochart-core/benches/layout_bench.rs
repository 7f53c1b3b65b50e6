// File: crates/nanochart-core/benches/layout_bench.rs
// Summary: Criterion benchmarks for range resolution, full layout and tick generation.

use nanochart_core::{resolve, values_for_range, Chart, ChartData, Series, Settings};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_data(labels: usize, series: usize) -> ChartData {
    let mut data = ChartData::new((0..labels).map(|i| format!("L{i}")).collect());
    for s in 0..series {
        let samples = (0..labels)
            .map(|i| (i as f64 * 0.01 + s as f64).sin() * 1_000.0 + (i as f64 * 0.1))
            .collect();
        data.add_series(Series::new(format!("S{s}"), samples));
    }
    data
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[1_000usize, 10_000usize, 50_000usize] {
        let data = gen_data(n, 4);
        group.bench_with_input(BenchmarkId::new("resolve", n), &data, |b, d| {
            b.iter(|| black_box(resolve(&d.series, d.labels.len())));
        });
        group.bench_with_input(BenchmarkId::new("full", n), &data, |b, d| {
            let mut chart = Chart::new(Settings::default(), 1600.0, 900.0).expect("chart");
            chart.set_data(d.clone()).expect("data");
            b.iter(|| {
                chart.invalidate();
                black_box(chart.layout().map(|l| l.series.len()))
            });
        });
    }
    group.bench_function("ticks", |b| {
        b.iter(|| black_box(values_for_range(nanochart_core::Range::new(-2_000.0, 3_000.0))));
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
