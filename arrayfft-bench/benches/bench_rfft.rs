use arrayfft::Complex32;
use arrayfft::rfft::RealFft;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use realfft::RealFftPlanner as RustRealFftPlanner;

fn bench_rfft(c: &mut Criterion) {
    let mut group = c.benchmark_group("rfft_parity");
    for &size in &[1024usize, 2048, 4096, 1000] {
        let input: Vec<f32> = (0..size).map(|i| i as f32).collect();
        let mut output = vec![Complex32::new(0.0, 0.0); size / 2 + 1];
        let mut engine = RealFft::<f32>::new();
        group.bench_function(BenchmarkId::new("arrayfft", size), |b| {
            b.iter(|| {
                engine.rfft(&input, &mut output).unwrap();
            })
        });

        let mut planner = RustRealFftPlanner::<f32>::new();
        let rfft = planner.plan_fft_forward(size);
        let mut in_data = input.clone();
        let mut out_data = rfft.make_output_vec();
        group.bench_function(BenchmarkId::new("realfft", size), |b| {
            b.iter(|| {
                in_data.copy_from_slice(&input);
                rfft.process(&mut in_data, &mut out_data).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rfft);
criterion_main!(benches);
