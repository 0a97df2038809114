use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use dash_core::smoothing::savgol;

fn gen_signal(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        v.push((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001));
    }
    v
}

fn bench_savgol(c: &mut Criterion) {
    let mut group = c.benchmark_group("savgol");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let data = gen_signal(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_w51")), &n, |b, _| {
            b.iter_batched(
                || data.clone(),
                |d| {
                    let _ = black_box(savgol(&d, 51, 3));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_savgol);
criterion_main!(benches);
