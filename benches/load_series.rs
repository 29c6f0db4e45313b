use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use coverage_compare::chart::{build_comparison_chart, LayerOrder};
use coverage_compare::series::{load_series, load_series_from_reader, LoadOptions};
use std::io::Cursor;
use tempfile::TempDir;

/// Create a coverage table with a monotonically growing coverage column
fn coverage_table(rows: usize) -> String {
    let mut text = String::with_capacity(rows * 16);
    text.push_str("x,y,strategy\n");
    let mut covered = 0u64;
    for i in 0..rows {
        covered += (i % 7) as u64;
        text.push_str(&format!("{},{},random\n", i, covered));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_series");

    for rows in [1_000usize, 10_000, 100_000] {
        let table = coverage_table(rows);
        group.throughput(Throughput::Bytes(table.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                let series = load_series_from_reader(
                    Cursor::new(table.as_bytes()),
                    "bench",
                    "<bench>",
                    &LoadOptions::default(),
                )
                .unwrap();
                black_box(series)
            })
        });
    }

    group.finish();
}

fn bench_load_and_build(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let with = temp_dir.path().join("with.csv");
    let without = temp_dir.path().join("without.csv");
    std::fs::write(&with, coverage_table(50_000)).unwrap();
    std::fs::write(&without, coverage_table(50_000)).unwrap();

    c.bench_function("load_two_and_build", |b| {
        b.iter(|| {
            let options = LoadOptions::default();
            let a = load_series(&with, "With harness", &options).unwrap();
            let b = load_series(&without, "Without harness", &options).unwrap();
            let chart = build_comparison_chart(vec![a, b], "bench", LayerOrder::AsGiven).unwrap();
            black_box(chart.grid())
        })
    });
}

criterion_group!(benches, bench_parse, bench_load_and_build);
criterion_main!(benches);
