use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use measurements_processor::models::AggregateTable;
use measurements_processor::processors::{scan_partition, MergeCoordinator};
use measurements_processor::readers::partition;

// Deterministic synthetic measurement data for benchmarking
fn synthetic_measurements(stations: usize, rows: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(rows * 16);
    for i in 0..rows {
        let station = i % stations;
        let tenths = ((i as i64 * 37 + station as i64 * 101) % 1999) - 999;
        let sign = if tenths < 0 { "-" } else { "" };
        let magnitude = tenths.abs();
        data.extend_from_slice(
            format!(
                "Station {};{}{}.{}\n",
                station,
                sign,
                magnitude / 10,
                magnitude % 10
            )
            .as_bytes(),
        );
    }
    data
}

fn bench_scan_partition(c: &mut Criterion) {
    let data = synthetic_measurements(413, 100_000);

    c.bench_function("scan 100k rows / 413 stations", |b| {
        b.iter(|| {
            let mut table = AggregateTable::new(true);
            scan_partition(black_box(&data), &mut table).unwrap();
            table.len()
        })
    });
}

fn bench_scan_without_key_verification(c: &mut Criterion) {
    let data = synthetic_measurements(413, 100_000);

    c.bench_function("scan 100k rows, hash-only hit test", |b| {
        b.iter(|| {
            let mut table = AggregateTable::new(false);
            scan_partition(black_box(&data), &mut table).unwrap();
            table.len()
        })
    });
}

fn bench_partitioned_scan_and_merge(c: &mut Criterion) {
    let data = synthetic_measurements(413, 100_000);

    let mut group = c.benchmark_group("partitioned scan + merge");
    for workers in [1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                b.iter(|| {
                    let partitions = partition(&data, workers);
                    let tables: Vec<AggregateTable> = partitions
                        .iter()
                        .map(|part| {
                            let mut table = AggregateTable::new(true);
                            scan_partition(part.bytes(&data), &mut table).unwrap();
                            table
                        })
                        .collect();
                    MergeCoordinator::new().merge_tables(tables).unwrap().len()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scan_partition,
    bench_scan_without_key_verification,
    bench_partitioned_scan_and_merge
);
criterion_main!(benches);
