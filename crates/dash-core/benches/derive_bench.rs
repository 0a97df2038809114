use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use dash_core::{derive_series, RawDataset, Record};

fn gen_dataset(days: usize) -> RawDataset {
    let regions = ["Jawa", "Kalimantan", "Papua", "Sumatera"];
    let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    let mut records = Vec::with_capacity(days * regions.len());
    for d in 0..days {
        for (ri, region) in regions.iter().enumerate() {
            let base = (d * (ri + 1)) as f64;
            records.push(Record {
                region: region.to_string(),
                date: start + chrono::Duration::days(d as i64),
                total_cases: base * 10.0,
                total_deaths: base * 0.3,
                total_recovered: base * 7.0,
                new_cases: base,
                new_deaths: base * 0.03,
                new_recovered: base * 0.7,
            });
        }
    }
    RawDataset::new(records)
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    for &days in &[1_000usize, 10_000usize] {
        let raw = gen_dataset(days);
        group.bench_with_input(BenchmarkId::from_parameter(format!("days{days}")), &days, |b, _| {
            b.iter_batched(
                || raw.clone(),
                |r| {
                    let _ = black_box(derive_series(&r, "Jawa"));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
